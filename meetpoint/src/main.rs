use clap::Parser;
use meetpoint::app::MeetpointCliArguments;

fn main() {
    env_logger::init();
    let args = MeetpointCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running meetpoint: {e}");
            std::process::exit(1);
        }
    }
}
