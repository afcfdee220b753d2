use anyhow::Result;
use env_logger::Env;
use log::info;

fn main() -> Result<()> {
    // Initialize logging with custom format; default to warn so log
    // lines don't interleave with shell output
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    info!("Starting Rolodex");
    rolodex::run()
}
