use clap::Parser;
use std::path::PathBuf;

use unwarp::batch::{self, BatchOptions};

#[derive(Parser)]
#[command(name = "unwarp")]
#[command(about = "Detect document-like quadrilaterals in photos and flatten them")]
struct Cli {
    /// Directory containing input images
    #[arg(long = "load_dir", value_name = "DIR")]
    load_dir: PathBuf,

    /// Directory that receives the rectified outputs
    #[arg(long = "save_dir", value_name = "DIR")]
    save_dir: PathBuf,

    /// File extension used to discover input images
    #[arg(long, default_value = "jpg")]
    ext: String,

    /// Also save each source image with the detected contours drawn
    #[arg(long = "save_contour")]
    save_contour: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    batch::run(&BatchOptions {
        load_dir: args.load_dir,
        save_dir: args.save_dir,
        ext: args.ext,
        save_contour: args.save_contour,
        verbose: args.verbose,
    })
}
