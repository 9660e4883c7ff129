use serde::{Deserialize, Serialize};

// 受け渡し場所を表す値型
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
}
