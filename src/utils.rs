//! Utils

use clap::Parser;

/// Arguments for the storefront demo binary
#[derive(Debug, Parser)]
pub struct StorefrontArgs {
    /// Fixture set to use for the catalog & seeded orders
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Email used for the mock sign-in
    #[clap(short, long, default_value = crate::session::DEMO_EMAIL)]
    pub email: String,

    /// Password used for the mock sign-in
    #[clap(short, long, default_value = crate::session::DEMO_PASSWORD)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn storefront_args_defaults() {
        let args = StorefrontArgs::parse_from(["storefront"]);

        assert_eq!(args.fixture, "demo");
        assert_eq!(args.email, crate::session::DEMO_EMAIL);
    }

    #[test]
    fn storefront_args_accept_overrides() {
        let args = StorefrontArgs::parse_from(["storefront", "-f", "other", "-e", "a@b.c"]);

        assert_eq!(args.fixture, "other");
        assert_eq!(args.email, "a@b.c");
    }
}
