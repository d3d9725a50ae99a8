//! Property tests over generated inputs

use artsplit_core::*;
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("=====".to_string()),
        Just("===".to_string()),
        Just(" =====".to_string()),
        "[a-c]{1,3}( [a-c]{1,3})?",
    ]
}

fn parse(lines: &[String]) -> Vec<Article> {
    let mut parser = LineParser::new(&SplitConfig::default()).unwrap();
    let mut articles = Vec::new();
    for line in lines {
        if let Some(article) = parser.consume(line.clone()).unwrap() {
            articles.push(article);
        }
    }
    articles.extend(parser.finish());
    articles
}

proptest! {
    #[test]
    fn prop_statistics_match_articles(lines in prop::collection::vec(line_strategy(), 0..60)) {
        let articles = parse(&lines);

        let sink = ArticleSink::new(
            MemoryWriter::new(OutputLayout::default()),
            SinkOptions::count_only(),
        );
        let output = Splitter::new(&SplitConfig::default(), sink)
            .unwrap()
            .split_lines(lines.clone())
            .unwrap();

        let stats = output.statistics;
        prop_assert_eq!(stats.articles_written(), articles.len());
        prop_assert_eq!(
            stats.total_content_lines(),
            articles.iter().map(|a| a.lines.len() - a.trailing_empty).sum::<usize>()
        );
        prop_assert!(stats.titles_with_duplicates() <= stats.duplicate_file_count());
    }

    #[test]
    fn prop_articles_never_start_or_end_empty(lines in prop::collection::vec(line_strategy(), 0..60)) {
        for article in parse(&lines) {
            let content = article.content();
            prop_assert!(!content.is_empty());
            prop_assert!(!is_empty_line(&content[0]));
            prop_assert!(!is_empty_line(&content[content.len() - 1]));
        }
    }

    #[test]
    fn prop_no_delimiter_means_one_article(
        first in "[a-z]{1,5} [a-z]{1,5}",
        rest in prop::collection::vec("[a-z ]{0,8}", 0..20),
    ) {
        let mut lines = vec![first.clone()];
        lines.extend(rest);
        let articles = parse(&lines);

        prop_assert_eq!(articles.len(), 1);
        prop_assert_eq!(&articles[0].title, first.split_whitespace().next().unwrap());
    }
}
