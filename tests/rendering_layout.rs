//! Integration tests for the rendered text layout.

use decision_lens::adapters::rendering::{bar, renderer_for, BAR_MARKER, TITLE};
use decision_lens::ports::RenderFormat;
use decision_lens::{analyze, format_analysis};

const PROBLEM: &str = "我担心父母反对，要不要放弃上海的工作回老家考公务员，房贷还有二十年";

#[test]
fn title_is_the_first_line() {
    let doc = format_analysis(&analyze(PROBLEM));
    assert_eq!(doc.lines().next(), Some(TITLE));
}

#[test]
fn five_numbered_sections_in_order() {
    let doc = format_analysis(&analyze(PROBLEM));
    let numbered: Vec<&str> = doc.lines().filter(|l| l.starts_with("## ")).collect();

    assert_eq!(numbered.len(), 5);
    for (i, heading) in numbered.iter().enumerate() {
        assert!(heading.starts_with(&format!("## {}.", i + 1)), "{}", heading);
    }
}

#[test]
fn every_strategy_has_a_sub_heading_in_both_sections() {
    let analysis = analyze(PROBLEM);
    let doc = format_analysis(&analysis);
    for strategy in analysis.strategy_space.strategies() {
        let heading = format!("### Strategy {}: {}", strategy.id, strategy.name);
        assert_eq!(doc.matches(&heading).count(), 2, "{}", heading);
    }
}

#[test]
fn bar_rows_use_one_marker_per_five_percent() {
    let analysis = analyze(PROBLEM);
    let doc = format_analysis(&analysis);

    let start = doc.find("## 4.").unwrap();
    let end = doc.find("## 5.").unwrap();
    let rows: Vec<&str> = doc[start..end]
        .lines()
        .filter(|l| l.starts_with("- "))
        .collect();
    let expected: usize = analysis.risk_analysis.iter().map(|r| r.distributions.len()).sum();
    assert_eq!(rows.len(), expected);

    for risk in &analysis.risk_analysis {
        for outcome in &risk.distributions {
            let p = outcome.probability.value();
            let row = format!("- {} {}% {}", bar(p), p, outcome.description);
            assert!(rows.contains(&row.as_str()), "missing row: {}", row);
            assert_eq!(bar(p).chars().filter(|c| *c == BAR_MARKER).count(), usize::from(p / 5));
        }
    }
}

#[test]
fn every_bias_is_rendered_with_its_mitigation() {
    let analysis = analyze(PROBLEM);
    let doc = format_analysis(&analysis);
    for bias in &analysis.biases {
        assert!(doc.contains(&format!("### {}", bias.type_label)));
        assert!(doc.contains(&bias.mitigation));
    }
}

#[test]
fn rendering_is_deterministic() {
    let analysis = analyze(PROBLEM);
    assert_eq!(format_analysis(&analysis), format_analysis(&analysis));
}

#[test]
fn renderer_factory_honours_format() {
    let analysis = analyze(PROBLEM);
    for format in [RenderFormat::Text, RenderFormat::Json, RenderFormat::JsonPretty] {
        let renderer = renderer_for(format);
        assert_eq!(renderer.format(), format);
        let out = renderer.render(&analysis).unwrap();
        assert_eq!(out.starts_with(TITLE), format == RenderFormat::Text);
    }
}
