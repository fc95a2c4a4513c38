use clap::Parser;
use feastfaster::app::FeastFasterApp;

fn main() {
    env_logger::init();
    let app = FeastFasterApp::parse();
    match app.run() {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                log::error!("failure encoding result: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
