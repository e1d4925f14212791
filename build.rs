fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile protobuf when server or client feature is enabled. Feature
    // detection uses the CARGO_FEATURE_* env vars Cargo sets for build scripts.
    let server = std::env::var_os("CARGO_FEATURE_SERVER").is_some();
    let client = std::env::var_os("CARGO_FEATURE_CLIENT").is_some();

    if server || client {
        tonic_build::configure()
            .build_server(server)
            .build_client(client)
            .compile_protos(&["proto/itemfeed.proto"], &["proto"])?;
    }

    Ok(())
}
