//! Parametros de configuracion de la tienda

/// Cantidad de dispensadores que se lanzan si no se configura otra cosa
pub const N_DISPENSERS: usize = 1;

/// Tiempo maximo (en ms) que un dispensador ocioso espera antes de volver a revisar
/// si se le pidio que se detenga, aun sin haber sido notificado
pub const IDLE_WAIT_IN_MS: u64 = 100;

pub const CUP_NAME: &str = "杯";
pub const TEA_NAME: &str = "茶";
pub const MILK_NAME: &str = "奶";
pub const SUGAR_NAME: &str = "糖";
pub const PEARL_NAME: &str = "珍珠";
pub const PUDDING_NAME: &str = "布丁";
pub const MANGO_NAME: &str = "芒果";
pub const GRAPE_NAME: &str = "葡萄";
