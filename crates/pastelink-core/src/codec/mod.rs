pub mod b64url;
pub mod compress;
pub mod fingerprint;
pub mod token;
