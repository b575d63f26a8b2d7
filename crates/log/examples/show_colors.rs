//! Prints one line per severity so the default palette can be eyeballed.
//!
//! Run with `cargo run --example show_colors`.

use lumen_log::{Logger, LoggerOptions};

fn main() {
    let logger = Logger::new(LoggerOptions::default().prefix("show-colors"));

    logger.debug("debug is yellow");
    logger.error("error is red");
    logger.group("group sits on a gray background");
    logger.info("info is blue (indented, inside the group)");
    logger.group_end();
    logger.log("log is dimmed");
    logger.warn("warn is orange");
}
