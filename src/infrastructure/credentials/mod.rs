mod static_credential_source;

pub use static_credential_source::StaticCredentialSource;
