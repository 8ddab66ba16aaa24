#![deny(missing_docs)]
//! A command-line interface for generating and verifying TOTP codes.

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use totp_core::algorithm::HashAlgorithm;
use totp_core::defaults;
use totp_core::secret;
use totp_core::totp::{Totp, TotpParameters};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Generate a new base32 shared secret\ntotp-cli secret\n\n# Print the current 6-digit code\ntotp-cli code --secret <BASE32>\n\n# Verify a code with one step of clock skew in each direction\ntotp-cli verify --secret <BASE32> --code 123456\n\n# Print a provisioning URI for an authenticator app\ntotp-cli uri --secret <BASE32> --label \"My Name\" --issuer \"My Company\""
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Sha1,
    Sha256,
    Sha512,
}

impl From<AlgorithmArg> for HashAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha1 => Self::Sha1,
            AlgorithmArg::Sha256 => Self::Sha256,
            AlgorithmArg::Sha512 => Self::Sha512,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new shared secret
    Secret {
        /// The length of the secret in characters
        #[arg(short, long, default_value_t = defaults::DEFAULT_RANDOM_SECRET_LENGTH)]
        length: usize,

        /// Print the raw alphanumeric secret instead of its base32 encoding
        #[arg(long)]
        raw: bool,
    },
    /// Print the current code for a secret
    Code {
        /// The shared secret as base32 text
        #[arg(short, long)]
        secret: String,

        /// The HMAC hash function
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Sha1)]
        algorithm: AlgorithmArg,

        /// The number of decimal digits in the code
        #[arg(long, default_value_t = defaults::DEFAULT_CODE_LENGTH)]
        digits: u8,

        /// The width of a time step in seconds
        #[arg(long, default_value_t = defaults::DEFAULT_PERIOD)]
        period: u64,
    },
    /// Verify a candidate code against a secret
    Verify {
        /// The shared secret as base32 text
        #[arg(short, long)]
        secret: String,

        /// The candidate code to check
        #[arg(short, long)]
        code: u32,

        /// The HMAC hash function
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Sha1)]
        algorithm: AlgorithmArg,

        /// The number of decimal digits in the code
        #[arg(long, default_value_t = defaults::DEFAULT_CODE_LENGTH)]
        digits: u8,

        /// The width of a time step in seconds
        #[arg(long, default_value_t = defaults::DEFAULT_PERIOD)]
        period: u64,

        /// Accepted steps behind the current window
        #[arg(long, default_value_t = defaults::DEFAULT_STEPS_BACK)]
        steps_back: u32,

        /// Accepted steps ahead of the current window
        #[arg(long, default_value_t = defaults::DEFAULT_STEPS_FORWARD)]
        steps_forward: u32,
    },
    /// Print the otpauth:// provisioning URI for a secret
    Uri {
        /// The shared secret as base32 text
        #[arg(short, long)]
        secret: String,

        /// The account label shown by authenticator apps
        #[arg(long, default_value = "")]
        label: String,

        /// The issuer shown by authenticator apps
        #[arg(long, default_value = "")]
        issuer: String,

        /// The HMAC hash function
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Sha1)]
        algorithm: AlgorithmArg,

        /// The number of decimal digits in the code
        #[arg(long, default_value_t = defaults::DEFAULT_CODE_LENGTH)]
        digits: u8,

        /// The width of a time step in seconds
        #[arg(long, default_value_t = defaults::DEFAULT_PERIOD)]
        period: u64,

        /// Include the algorithm parameter in the URI
        #[arg(long)]
        include_algorithm: bool,

        /// Print a Google Charts QR-code URL instead of the bare URI
        #[arg(long)]
        chart: bool,
    },
}

fn build_totp(parameters: TotpParameters) -> Totp {
    Totp::new(parameters).unwrap_or_else(|e| {
        error!("Failed to construct the TOTP engine: {e}");
        std::process::exit(1);
    })
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Secret { length, raw } => match secret::random_secret(length, !raw) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!("Failed to generate a secret: {e}");
                std::process::exit(1);
            }
        },
        Commands::Code {
            secret,
            algorithm,
            digits,
            period,
        } => {
            let totp = build_totp(TotpParameters {
                secret,
                algorithm: Some(algorithm.into()),
                code_length: Some(digits),
                period: Some(period),
                ..TotpParameters::default()
            });
            let code = totp.current_code();
            info!(
                "Code valid for another {} second(s).",
                totp.seconds_remaining()
            );
            println!("{code:0width$}", width = usize::from(totp.code_length()));
        }
        Commands::Verify {
            secret,
            code,
            algorithm,
            digits,
            period,
            steps_back,
            steps_forward,
        } => {
            let totp = build_totp(TotpParameters {
                secret,
                algorithm: Some(algorithm.into()),
                code_length: Some(digits),
                period: Some(period),
                steps_back: Some(steps_back),
                steps_forward: Some(steps_forward),
                ..TotpParameters::default()
            });
            if totp.verify(code) {
                info!(
                    "Code accepted within {} step(s) back and {} forward.",
                    totp.steps_back(),
                    totp.steps_forward()
                );
                println!("verified");
            } else {
                error!("The code did not match any accepted time window.");
                println!("not verified");
                std::process::exit(1);
            }
        }
        Commands::Uri {
            secret,
            label,
            issuer,
            algorithm,
            digits,
            period,
            include_algorithm,
            chart,
        } => {
            let totp = build_totp(TotpParameters {
                secret,
                algorithm: Some(algorithm.into()),
                code_length: Some(digits),
                period: Some(period),
                label,
                issuer,
                algorithm_in_uri: include_algorithm,
                ..TotpParameters::default()
            });
            if chart {
                println!("{}", totp.chart_url());
            } else {
                println!("{}", totp.provisioning_uri());
            }
        }
    }
}
