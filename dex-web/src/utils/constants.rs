//! Application constants

/// Concordium testnet gRPC node used once real chain queries are wired in.
pub const CONCORDIUM_NODE_ENDPOINT: &str = "https://grpc.testnet.concordium.com";
pub const CONCORDIUM_NODE_PORT: u16 = 20000;

/// Challenge included in every presentation request. Statically fixed for
/// this proof of concept; a production deployment would issue it server-side.
pub const VERIFICATION_CHALLENGE: &str =
    "BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB";

/// Identity provider indices the age statement accepts credentials from.
pub const IDENTITY_PROVIDERS: [u32; 6] = [0, 1, 2, 3, 4, 5];

/// Minimum age the presentation must prove.
pub const MIN_AGE_YEARS: i32 = 18;

/// How long to wait for the wallet extension to inject its provider.
pub const PROVIDER_DETECT_TIMEOUT_MS: u32 = 2000;

// Route paths
pub const ROUTE_LANDING: &str = "/";
pub const ROUTE_HOME: &str = "/home";
pub const ROUTE_EXCHANGE: &str = "/exchange";
