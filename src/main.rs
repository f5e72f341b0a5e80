use ip_printer::print_ip;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a stderr subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    print_ip(-1i8); // 255
    print_ip(0i16); // 0.0
    print_ip(2130706433i32); // 127.0.0.1
    print_ip(8875824491850138409i64); // 123.45.67.89.101.112.131.41
}
