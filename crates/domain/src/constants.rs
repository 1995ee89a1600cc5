//! Application constants
//!
//! Centralized location for storage keys, defaults and user-facing messages.

// Configuration defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORAGE_FILE: &str = "bizhub-storage.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Browser storage keys
pub const THEME_STORAGE_KEY: &str = "theme";
pub const SESSION_TOKEN_STORAGE_KEY: &str = "session_token";

// Page URL query parameter carrying the checkout session on return
pub const CHECKOUT_SESSION_QUERY_PARAM: &str = "session_id";

// Checkout status value that counts as a completed payment
pub const CHECKOUT_PAID_STATUS: &str = "paid";

pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment successful! Thank you for your payment.";
