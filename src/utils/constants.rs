pub const TOKEN_ENV: &str = "PROXY_TOKEN";
pub const TARGET_URL_ENV: &str = "PROXY_TARGET_URL";
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_TARGET_URL: &str = "https://configurationalmodeling.com";
pub const DEFAULT_PORT: u16 = 3000;

// the gate only serves GETs, nothing legit carries a body
pub const SERVER_REQUEST_BODY_LIMIT: usize = 16 * 1024;
pub const SERVER_REQUEST_TIMEOUT_SECS: u64 = 30;
