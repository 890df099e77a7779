// HR accounts. "Login" is an unauthenticated lookup by email.

pub mod handlers;
