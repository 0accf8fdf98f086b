//! Tests for the translation API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use std::io::Cursor;

    #[test]
    fn test_translator_creation() {
        let translator = Translator::new();
        assert_eq!(translator.config(), &Config::default());

        let config = Config::builder()
            .threads(Some(2))
            .parallel_threshold(50)
            .build()
            .unwrap();
        let custom = Translator::with_config(config);
        assert_eq!(custom.config().threads(), Some(2));
        assert_eq!(custom.config().parallel_threshold(), 50);
        assert!(!custom.config().force_parallel());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.threads(), None);
        assert_eq!(config.parallel_threshold(), defaults::PARALLEL_THRESHOLD);
        assert!(config.effective_threads() >= 1);
    }

    #[test]
    fn test_config_validation() {
        let zero_threads = Config::builder().threads(Some(0)).build();
        assert!(matches!(zero_threads, Err(Error::Configuration(_))));

        let zero_threshold = Config::builder().parallel_threshold(0).build();
        assert!(matches!(zero_threshold, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_input_variants() {
        let text = Input::from_text("Hello world").into_text().unwrap();
        assert_eq!(text, "Hello world");

        let bytes = Input::from_bytes(b"Hello world".to_vec()).into_text().unwrap();
        assert_eq!(bytes, "Hello world");

        let reader = Input::from_reader(Cursor::new(b"Hello world".to_vec()))
            .into_text()
            .unwrap();
        assert_eq!(reader, "Hello world");
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let result = Input::from_bytes(vec![0x66, 0x6f, 0xff]).into_text();
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn test_missing_file_is_missing_source() {
        let result = Input::from_file("/nonexistent/piglatin/input.txt").into_text();
        match result {
            Err(Error::MissingSource { path, .. }) => {
                assert!(path.ends_with("input.txt"));
            }
            other => panic!("expected MissingSource, got {other:?}"),
        }
    }

    #[test]
    fn test_basic_translation() {
        let output = Translator::new()
            .translate(Input::from_text("The quick fox\nHello, world!\n"))
            .unwrap();

        assert_eq!(output.line_count(), 2);
        assert_eq!(output.lines[0].translated, "Ethay uickqay oxfay");
        assert_eq!(output.lines[1].translated, "Ellohay, orldway!");
        assert_eq!(
            output.translated_text(),
            "Ethay uickqay oxfay\nEllohay, orldway!\n"
        );
        assert_eq!(output.metadata.strategy_used, "Sequential");
        assert_eq!(output.metadata.stats.lines, 2);
        assert_eq!(output.metadata.stats.words, 5);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let output = Translator::new()
            .translate(Input::from_text("apple\r\n\r\npie"))
            .unwrap();

        let translated: Vec<_> = output.lines.iter().map(|l| l.translated.as_str()).collect();
        assert_eq!(translated, vec!["appleway", "", "iepay"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let output = Translator::new()
            .translate(Input::from_text("Hello\rworld\r"))
            .unwrap();

        assert_eq!(output.line_count(), 2);
        assert_eq!(output.translated_text(), "Ellohay\norldway\n");

        let mixed = Translator::new()
            .translate(Input::from_text("one\rtwo\r\nthree\n\rfour"))
            .unwrap();
        let translated: Vec<_> = mixed.lines.iter().map(|l| l.translated.as_str()).collect();
        assert_eq!(translated, vec!["oneway", "otway", "reethay", "", "ourfay"]);
    }

    #[test]
    fn test_stream_splits_like_buffered() {
        let text = "Hello\rworld\r\n\rapple\npie\r";
        let mut sink = Vec::new();

        let stats = Translator::new()
            .translate_stream(Cursor::new(text), &mut sink)
            .unwrap();
        let buffered = Translator::new().translate(Input::from_text(text)).unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), buffered.translated_text());
        assert_eq!(stats, buffered.metadata.stats);
        assert_eq!(stats.lines, 5);
    }

    #[test]
    fn test_stream_rejects_invalid_utf8() {
        let mut sink = Vec::new();
        let result = Translator::new()
            .translate_stream(Cursor::new(vec![b'o', 0xff, b'\n']), &mut sink);
        assert!(matches!(result, Err(Error::InvalidEncoding(_))));
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        let output = Translator::new().translate(Input::from_text("")).unwrap();
        assert_eq!(output.line_count(), 0);
        assert_eq!(output.translated_text(), "");
    }

    #[test]
    fn test_stream_translation() {
        let reader = Cursor::new("eat my shorts\n\n...\n");
        let mut sink = Vec::new();

        let stats = Translator::new()
            .translate_stream(reader, &mut sink)
            .unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "eatway my ortsshay\n\n...\n"
        );
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.punctuation_only, 1);
        assert_eq!(stats.unclassified, 1);
    }

    #[test]
    fn test_forced_parallel_translation() {
        let config = Config::builder()
            .threads(Some(2))
            .force_parallel(true)
            .build()
            .unwrap();
        let output = Translator::with_config(config)
            .translate(Input::from_text("one\ntwo\nthree"))
            .unwrap();

        assert_eq!(output.metadata.strategy_used, "Parallel");
        let translated: Vec<_> = output.lines.iter().map(|l| l.translated.as_str()).collect();
        assert_eq!(translated, vec!["oneway", "otway", "reethay"]);
    }
}
