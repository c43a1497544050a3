#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn enquiry_url() -> String {
    format!("{}{}", get_backend_url(), shared::SEND_EMAIL_PATH)
}
