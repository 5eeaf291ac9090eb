//! CLI argument parsing and validation.

mod args;

pub use args::{
    Action, Args, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REPO, DEFAULT_VOICE, SynthesisJob,
    UsageError,
};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tts").chain(argv.iter().copied())).unwrap()
    }

    // ===========================================
    // Defaults
    // ===========================================

    #[test]
    fn test_defaults() {
        let args = parse(&[]);

        assert_eq!(args.text, None);
        assert_eq!(args.output, None);
        assert_eq!(args.voice, "expr-voice-5-m");
        assert_eq!(args.speed, 1.0);
        assert_eq!(args.repo, "KittenML/kitten-tts-nano-0.1");
        assert_eq!(args.cache_dir, None);
        assert!(!args.list_voices);
        assert_eq!(args.host, "localhost");
        assert_eq!(args.port, 9290);
    }

    #[test]
    fn test_short_and_long_flags() {
        let short = parse(&["-t", "Hello", "-o", "out.wav"]);
        let long = parse(&["--text", "Hello", "--output", "out.wav"]);

        assert_eq!(short.text.as_deref(), Some("Hello"));
        assert_eq!(short.output, Some(PathBuf::from("out.wav")));
        assert_eq!(short.text, long.text);
        assert_eq!(short.output, long.output);
    }

    #[test]
    fn test_invalid_speed_is_usage_error() {
        let result = Args::try_parse_from(["tts", "--speed", "fast"]);

        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    // ===========================================
    // Action selection
    // ===========================================

    #[test]
    fn test_action_synthesize() {
        let args = parse(&[
            "-t",
            "Hi",
            "-o",
            "/tmp/x/y.wav",
            "--voice",
            "expr-voice-5-f",
            "--speed",
            "1.1",
        ]);

        let action = args.action().unwrap();

        assert_eq!(
            action,
            Action::Synthesize(SynthesisJob {
                text: "Hi".to_string(),
                output: PathBuf::from("/tmp/x/y.wav"),
                voice: "expr-voice-5-f".to_string(),
                speed: 1.1,
            })
        );
    }

    #[test]
    fn test_action_list_voices_needs_nothing_else() {
        let args = parse(&["--list-voices"]);
        assert_eq!(args.action().unwrap(), Action::ListVoices);
    }

    #[test]
    fn test_action_list_voices_takes_precedence() {
        let args = parse(&["--list-voices", "-t", "Hello", "-o", "out.wav"]);
        assert_eq!(args.action().unwrap(), Action::ListVoices);
    }

    #[test]
    fn test_action_missing_text() {
        let args = parse(&["-o", "out.wav"]);
        assert_eq!(args.action(), Err(UsageError::MissingTextOrOutput));
    }

    #[test]
    fn test_action_missing_output() {
        let args = parse(&["-t", "Hello"]);
        assert_eq!(args.action(), Err(UsageError::MissingTextOrOutput));
    }

    #[test]
    fn test_action_empty_text_counts_as_missing() {
        let args = parse(&["-t", "", "-o", "out.wav"]);
        assert_eq!(args.action(), Err(UsageError::MissingTextOrOutput));
    }

    #[test]
    fn test_usage_error_exits_with_code_two() {
        use clap::CommandFactory;
        use clap::error::ErrorKind;

        let err = Args::command().error(
            ErrorKind::MissingRequiredArgument,
            UsageError::MissingTextOrOutput,
        );

        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("--list-voices"));
    }

    // ===========================================
    // Model config
    // ===========================================

    #[test]
    fn test_model_config_from_args() {
        let args = parse(&[
            "--repo",
            "KittenML/kitten-tts-mini-0.1",
            "--cache-dir",
            "/cache",
            "--host",
            "tts-server",
            "--port",
            "8000",
        ]);

        let config = args.model_config();

        assert_eq!(config.repo, "KittenML/kitten-tts-mini-0.1");
        assert_eq!(config.cache_dir, Some(PathBuf::from("/cache")));
        assert_eq!(config.host, "tts-server");
        assert_eq!(config.port, 8000);
    }
}
