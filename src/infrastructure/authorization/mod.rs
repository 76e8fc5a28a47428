mod allow_all_authorizer;

pub use allow_all_authorizer::AllowAllAuthorizer;
