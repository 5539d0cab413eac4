//! CLI Module
//!
//! Command-line interface for the wavchan conversions.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::convert::DEFAULT_CHANNEL_MODE;
use crate::transform::ChannelMode;

/// Wavchan - stereo/mono WAV conversion with mono-compatible packing
#[derive(Parser, Debug)]
#[command(name = "wavchan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive a mono file from a 16-bit stereo file
    #[command(name = "stereo-to-mono")]
    StereoToMono {
        /// 16-bit stereo input
        input: PathBuf,

        /// Mono output
        output: PathBuf,

        /// Channel to keep: left (0), right (1), sum (2) or diff (3)
        #[arg(short, long, default_value_t = DEFAULT_CHANNEL_MODE)]
        mode: ChannelMode,
    },

    /// Join two 16-bit mono files into a stereo file
    #[command(name = "mono-to-stereo")]
    MonoToStereo {
        /// Left channel input
        left: PathBuf,

        /// Right channel input
        right: PathBuf,

        /// Stereo output
        output: PathBuf,
    },

    /// Pack a 16-bit stereo file into a mono-compatible 32-bit file
    #[command(name = "encode")]
    Encode {
        /// 16-bit stereo input
        input: PathBuf,

        /// 32-bit combined output
        output: PathBuf,
    },

    /// Unpack a 32-bit combined file back into 16-bit stereo
    #[command(name = "decode")]
    Decode {
        /// 32-bit combined input
        input: PathBuf,

        /// 16-bit stereo output
        output: PathBuf,
    },

    /// Print the header of a WAV file
    #[command(name = "info")]
    Info {
        /// File to inspect
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode() {
        let cli = Cli::try_parse_from(["wavchan", "stereo-to-mono", "in.wav", "out.wav"]).unwrap();
        match cli.command {
            Commands::StereoToMono { mode, .. } => assert_eq!(mode, ChannelMode::Sum),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_numeric_mode_alias() {
        let cli = Cli::try_parse_from([
            "wavchan",
            "-v",
            "stereo-to-mono",
            "in.wav",
            "out.wav",
            "--mode",
            "3",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::StereoToMono { mode, .. } => assert_eq!(mode, ChannelMode::Diff),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_mode_names_any_case() {
        let cases = [
            ("LEFT", ChannelMode::Left),
            ("1", ChannelMode::Right),
            ("Sum", ChannelMode::Sum),
        ];
        for (arg, expected) in cases {
            let cli =
                Cli::try_parse_from(["wavchan", "stereo-to-mono", "a.wav", "b.wav", "-m", arg])
                    .unwrap();
            match cli.command {
                Commands::StereoToMono { mode, .. } => assert_eq!(mode, expected, "arg {}", arg),
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result =
            Cli::try_parse_from(["wavchan", "stereo-to-mono", "a.wav", "b.wav", "--mode", "mid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mono_to_stereo_args() {
        let cli = Cli::try_parse_from(["wavchan", "mono-to-stereo", "l.wav", "r.wav", "s.wav"])
            .unwrap();
        match cli.command {
            Commands::MonoToStereo { left, right, output } => {
                assert_eq!(left, PathBuf::from("l.wav"));
                assert_eq!(right, PathBuf::from("r.wav"));
                assert_eq!(output, PathBuf::from("s.wav"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
