mod error;
use crate::error::{Error, Result};
use bitplane_core::{
    codecs::{
        codec::{Codec, ConfigFlags, ConfigParams},
        image::StegaImage,
        text::StegaText,
    },
    diff,
    image_wrapper::{ImageWrapper, PixelBuffer},
    pixel::Rgb,
    transform,
};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// A least-significant-bit steganography tool written in Rust
#[derive(Parser)]
#[command(name = "bitplane")]
#[command(about = "A least-significant-bit steganography tool written in Rust", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enable verbose output.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message within a target image.
    #[command(visible_alias = "ht")]
    HideText {
        /// Carrier image path.
        #[arg(value_name = "CARRIER_IMAGE")]
        carrier: String,
        /// Output image path.
        #[arg(value_name = "OUTPUT_IMAGE")]
        output: String,
        /// Text to hide. Only letters and spaces are supported.
        #[arg(value_name = "TEXT")]
        text: String,
        /// Write as much of the message as fits, rather than failing.
        #[arg(long)]
        truncate: bool,
    },
    /// Reveal a message hidden within an image.
    #[command(visible_alias = "rt")]
    RevealText {
        /// Encoded image path.
        #[arg(value_name = "ENCODED_IMAGE")]
        encoded: String,
    },
    /// Hide a secret image within a carrier image.
    #[command(visible_alias = "hi")]
    HideImage {
        /// Carrier image path.
        #[arg(value_name = "CARRIER_IMAGE")]
        carrier: String,
        /// Secret image path.
        #[arg(value_name = "SECRET_IMAGE")]
        secret: String,
        /// Output image path.
        #[arg(value_name = "OUTPUT_IMAGE")]
        output: String,
        /// The carrier row of the top edge of the secret image.
        #[arg(long, default_value_t = 0)]
        row: usize,
        /// The carrier column of the left edge of the secret image.
        #[arg(long, default_value_t = 0)]
        col: usize,
        /// Fail if the secret image does not fit, rather than clipping it.
        #[arg(long)]
        strict: bool,
    },
    /// Reveal any image hidden within the low bits of an image.
    #[command(visible_alias = "ri")]
    RevealImage {
        /// Encoded image path.
        #[arg(value_name = "ENCODED_IMAGE")]
        encoded: String,
        /// Output image path.
        #[arg(value_name = "OUTPUT_IMAGE")]
        output: String,
    },
    /// Clear the low bits of every pixel within an image.
    ClearLow {
        /// Input image path.
        #[arg(value_name = "INPUT_IMAGE")]
        input: String,
        /// Output image path.
        #[arg(value_name = "OUTPUT_IMAGE")]
        output: String,
    },
    /// Write the high bits of a colour into the low bits of every pixel within an image.
    SetLow {
        /// Input image path.
        #[arg(value_name = "INPUT_IMAGE")]
        input: String,
        /// Output image path.
        #[arg(value_name = "OUTPUT_IMAGE")]
        output: String,
        /// The colour to write, as comma-separated red, green and blue values.
        #[arg(short, long, value_parser = parse_colour, default_value = "255,175,175")]
        colour: Rgb,
    },
    /// Check whether two images are identical.
    Compare {
        /// First image path.
        #[arg(value_name = "FIRST_IMAGE")]
        first: String,
        /// Second image path.
        #[arg(value_name = "SECOND_IMAGE")]
        second: String,
    },
    /// Locate the region in which two images differ.
    Diff {
        /// Original image path.
        #[arg(value_name = "ORIGINAL_IMAGE")]
        original: String,
        /// Modified image path.
        #[arg(value_name = "MODIFIED_IMAGE")]
        modified: String,
        /// Save a copy of the original image with the differing region outlined.
        #[arg(long, value_name = "OUTPUT_IMAGE")]
        highlight: Option<String>,
    },
    /// Convert a randomly placed region of an image to greyscale.
    Grey {
        /// Input image path.
        #[arg(value_name = "INPUT_IMAGE")]
        input: String,
        /// Output image path.
        #[arg(value_name = "OUTPUT_IMAGE")]
        output: String,
        /// The width of the region.
        #[arg(value_name = "WIDTH")]
        width: usize,
        /// The height of the region.
        #[arg(value_name = "HEIGHT")]
        height: usize,
    },
    /// Show how many characters of text can be hidden within an image.
    Capacity {
        /// Carrier image path.
        #[arg(value_name = "CARRIER_IMAGE")]
        carrier: String,
    },
    /// Show example commands
    Examples,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .expect("failed to initialise the logger");

    let result = match cli.command {
        Commands::HideText {
            carrier,
            output,
            text,
            truncate,
        } => handle_hide_text(&carrier, &output, &text, truncate, cli.verbose),
        Commands::RevealText { encoded } => handle_reveal_text(&encoded, cli.verbose),
        Commands::HideImage {
            carrier,
            secret,
            output,
            row,
            col,
            strict,
        } => handle_hide_image(&carrier, &secret, &output, (row, col), strict, cli.verbose),
        Commands::RevealImage { encoded, output } => {
            handle_reveal_image(&encoded, &output, cli.verbose)
        }
        Commands::ClearLow { input, output } => load_image(&input)
            .and_then(|img| save_image(&StegaImage::clear_low_bits(&img), &output)),
        Commands::SetLow {
            input,
            output,
            colour,
        } => load_image(&input)
            .and_then(|img| save_image(&StegaImage::insert_low_bits(&img, colour), &output)),
        Commands::Compare { first, second } => handle_compare(&first, &second),
        Commands::Diff {
            original,
            modified,
            highlight,
        } => handle_diff(&original, &modified, highlight.as_deref()),
        Commands::Grey {
            input,
            output,
            width,
            height,
        } => handle_grey(&input, &output, width, height),
        Commands::Capacity { carrier } => load_image(&carrier).map(|img| {
            println!(
                "{carrier} can hold {} characters of text.",
                StegaText::capacity(&img)
            );
        }),
        Commands::Examples => {
            show_examples();
            Ok(())
        }
    };

    if let Err(e) = result {
        show_abort_message(e);
        return;
    }

    std::process::exit(0);
}

/// Handle the hide text command.
fn handle_hide_text(
    carrier: &str,
    output: &str,
    text: &str,
    truncate: bool,
    verbose: bool,
) -> Result<()> {
    let img = load_image(carrier)?;

    let mut codec = StegaText::new();
    codec.set_flag_state(ConfigFlags::Truncate, truncate);
    codec.set_flag_state(ConfigFlags::Verbose, verbose);

    let embedded = codec
        .encode(&img, &text.to_string())
        .map_err(|e| Error::Encoding(e.to_string()))?;
    if !embedded.is_complete() {
        log::warn!(
            "the message was truncated: only {} of {} codes were written",
            embedded.written,
            embedded.requested
        );
    }

    save_image(&embedded.image, output)?;
    println!("The text has been successfully hidden.");
    Ok(())
}

/// Handle the reveal text command.
fn handle_reveal_text(encoded: &str, verbose: bool) -> Result<()> {
    let img = load_image(encoded)?;

    let mut codec = StegaText::new();
    codec.set_flag_state(ConfigFlags::Verbose, verbose);

    let text = codec
        .decode(&img)
        .map_err(|e| Error::Decoding(e.to_string()))?;

    println!("{}", "-".repeat(32));
    println!("{text}");
    Ok(())
}

/// Handle the hide image command.
fn handle_hide_image(
    carrier: &str,
    secret: &str,
    output: &str,
    anchor: (usize, usize),
    strict: bool,
    verbose: bool,
) -> Result<()> {
    let carrier_img = load_image(carrier)?;
    let secret_img = load_image(secret)?;

    if !StegaImage::can_embed(&carrier_img, &secret_img) {
        log::warn!(
            "the secret image ({}x{}) is larger than the carrier image ({}x{})",
            secret_img.width(),
            secret_img.height(),
            carrier_img.width(),
            carrier_img.height()
        );
    }

    let mut codec = StegaImage::new();
    codec.set_flag_state(ConfigFlags::Truncate, !strict);
    codec.set_flag_state(ConfigFlags::Verbose, verbose);
    codec.set_parameter(ConfigParams::Anchor {
        row: anchor.0,
        col: anchor.1,
    });

    let embedded = codec
        .encode(&carrier_img, &secret_img)
        .map_err(|e| Error::Encoding(e.to_string()))?;
    if !embedded.is_complete() {
        log::warn!(
            "the secret image was clipped: only {} of {} pixels were written",
            embedded.written,
            embedded.requested
        );
    }

    save_image(&embedded.image, output)?;
    println!("The image has been successfully hidden.");
    Ok(())
}

/// Handle the reveal image command.
fn handle_reveal_image(encoded: &str, output: &str, verbose: bool) -> Result<()> {
    let img = load_image(encoded)?;

    let mut codec = StegaImage::new();
    codec.set_flag_state(ConfigFlags::Verbose, verbose);

    let revealed = codec
        .decode(&img)
        .map_err(|e| Error::Decoding(e.to_string()))?;

    save_image(&revealed, output)?;
    println!("The revealed image has been saved to {output}");
    Ok(())
}

/// Handle the compare command.
fn handle_compare(first: &str, second: &str) -> Result<()> {
    let a = load_image(first)?;
    let b = load_image(second)?;

    if diff::equal_images(&a, &b) {
        println!("The images are identical.");
    } else if !a.same_dimensions(&b) {
        println!("The images have different dimensions.");
    } else {
        println!(
            "The images differ in {} pixels.",
            diff::find_differences(&a, &b).len()
        );
    }

    Ok(())
}

/// Handle the diff command.
fn handle_diff(original: &str, modified: &str, highlight: Option<&str>) -> Result<()> {
    let a = load_image(original)?;
    let b = load_image(modified)?;

    if !a.same_dimensions(&b) {
        log::warn!("the images have different dimensions, so no differences can be reported");
    }

    let points = diff::find_differences(&a, &b);
    match diff::bounding_box_of(&points) {
        Some(bb) => println!(
            "{} pixels differ, within rows {}..={} and columns {}..={}.",
            points.len(),
            bb.min_row,
            bb.max_row,
            bb.min_col,
            bb.max_col
        ),
        None => println!("No differences were found."),
    }

    if let Some(path) = highlight {
        save_image(&diff::highlight_region(&a, &points), path)?;
        println!("The highlighted image has been saved to {path}");
    }

    Ok(())
}

/// Handle the grey command.
fn handle_grey(input: &str, output: &str, width: usize, height: usize) -> Result<()> {
    let img = load_image(input)?;

    let (grey, origin) = transform::grey_random_region(&img, width, height, &mut rand::rng())
        .map_err(|e| Error::Image(e.to_string()))?;
    log::debug!("greyed a {width}x{height} region at ({}, {})", origin.row, origin.col);

    save_image(&grey, output)
}

/// Load an image, converting any error into a CLI error.
fn load_image(path: &str) -> Result<ImageWrapper> {
    ImageWrapper::load_from_file(path).map_err(|e| Error::Image(format!("{path}: {e}")))
}

/// Save an image, converting any error into a CLI error.
fn save_image(img: &ImageWrapper, path: &str) -> Result<()> {
    img.save(path).map_err(|e| Error::Image(format!("{path}: {e}")))
}

/// Parse a colour from a string of comma-separated red, green and blue values.
fn parse_colour(s: &str) -> Result<Rgb> {
    let channels: Vec<u8> = s
        .split(',')
        .map(|v| v.trim().parse::<u8>())
        .collect::<core::result::Result<_, _>>()
        .map_err(|_| Error::ColourInvalid(s.to_string()))?;

    match channels[..] {
        [r, g, b] => Ok(Rgb::new(r, g, b)),
        _ => Err(Error::ColourInvalid(s.to_string())),
    }
}

/// Display an error message.
pub fn show_abort_message(error: Error) {
    eprintln!("Error: {error}");
    std::process::exit(1);
}

/// Show the example command line arguments.
fn show_examples() {
    let split = "-".repeat(60);
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    println!("\n{split}");
    println!("{bold}TEXT EXAMPLES{reset}");
    println!("{split}");

    println!("{bold}Hide a message within an image:{reset}");
    println!("  bitplane hide-text beach.png hidden.png \"HELLO WORLD\"\n");

    println!("{bold}Reveal a hidden message:{reset}");
    println!("  bitplane reveal-text hidden.png\n");

    println!("{bold}Check how much text an image can hold:{reset}");
    println!("  bitplane capacity beach.png\n");

    println!("{split}");
    println!("{bold}IMAGE EXAMPLES{reset}");
    println!("{split}");

    println!("{bold}Hide an image at a specific location:{reset}");
    println!("  bitplane hide-image hall.png robot.png hidden.png --row 50 --col 300\n");

    println!("{bold}Reveal a hidden image:{reset}");
    println!("  bitplane reveal-image hidden.png revealed.png\n");

    println!("{bold}Write a colour into the low bits of every pixel:{reset}");
    println!("  bitplane set-low beach.png marked.png --colour 255,175,175\n");

    println!("{split}");
    println!("{bold}COMPARISON EXAMPLES{reset}");
    println!("{split}");

    println!("{bold}Check whether two images are identical:{reset}");
    println!("  bitplane compare swan.png swan-copy.png\n");

    println!("{bold}Outline the region where a hidden image was written:{reset}");
    println!("  bitplane diff hall.png hidden.png --highlight outlined.png\n");

    println!("{split}");
    println!("{bold}NOTES{reset}");
    println!("{split}");

    println!("Only letters and spaces can be hidden as text. Lowercase letters are revealed as uppercase.");
    println!("Hidden data only survives lossless formats. Saving to JPEG is refused.");
}
