use outline_core::{extract_key_points, ContentEnhancer, SlideAllocator, SourceRecord};
use proptest::prelude::*;

fn arb_sentence() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,10}",
        "[a-z ]{20,40}",
        "[A-Za-z ,]{30,120}",
        "[a-z ]{190,220}",
    ]
}

fn arb_paragraph() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_sentence(), 0..6),
        prop::sample::select(vec![". ", "! ", "? ", "... ", " "]),
    )
        .prop_map(|(sentences, sep)| sentences.join(sep))
}

fn arb_source() -> impl Strategy<Value = SourceRecord> {
    (
        "[a-z]{0,12}",
        "(https://[a-z]{3,8}\\.example/[a-z]{0,6})?",
        prop::collection::vec(arb_paragraph(), 0..5),
        prop::collection::vec("[A-Za-z ]{0,90}", 0..8),
    )
        .prop_map(|(label, url, paragraphs, sections)| SourceRecord {
            source_label: label,
            url,
            title: String::new(),
            paragraphs,
            sections,
        })
}

proptest! {
    #[test]
    fn outline_shape_holds_for_any_sources(
        count in 5usize..=12,
        sources in prop::collection::vec(arb_source(), 0..5),
    ) {
        let outline = SlideAllocator::new().allocate("Topic", count, &sources).unwrap();

        prop_assert_eq!(outline.slides.len(), count);
        prop_assert_eq!(outline.slides[0].title.as_str(), "Introduction");
        prop_assert_eq!(outline.slides[count - 1].title.as_str(), "Conclusion");
        for (i, slide) in outline.slides.iter().enumerate() {
            prop_assert_eq!(slide.number, i + 1);
            prop_assert_eq!(slide.content.len(), 3);
            prop_assert!(slide.title.chars().count() <= 60);
        }
    }

    #[test]
    fn short_outlines_keep_intro_and_conclusion(
        count in 2usize..5,
        sources in prop::collection::vec(arb_source(), 0..3),
    ) {
        let outline = SlideAllocator::new().allocate("Topic", count, &sources).unwrap();

        prop_assert_eq!(outline.slides.len(), count);
        prop_assert_eq!(outline.slides[0].title.as_str(), "Introduction");
        prop_assert_eq!(outline.slides[count - 1].title.as_str(), "Conclusion");
    }

    #[test]
    fn extraction_is_bounded(text in arb_paragraph(), n in 0usize..6) {
        let points = extract_key_points(&text, n);

        prop_assert!(points.len() <= n);
        for point in &points {
            let len = point.trim().chars().count();
            prop_assert!(len > 30 && len < 200, "length {} out of range", len);
        }
    }

    #[test]
    fn enhance_is_idempotent(
        count in 2usize..=12,
        sources in prop::collection::vec(arb_source(), 0..3),
    ) {
        let enhancer = ContentEnhancer::new();
        let outline = SlideAllocator::new().allocate("Topic!", count, &sources).unwrap();
        let once = enhancer.enhance(&outline);

        prop_assert_eq!(&enhancer.enhance(&once), &once);
        for slide in &once.slides {
            for point in &slide.content {
                prop_assert!(point.ends_with('.'));
            }
        }
    }
}

#[test]
fn empty_and_short_text_yield_nothing() {
    for n in 0..5 {
        assert!(extract_key_points("", n).is_empty());
        assert!(extract_key_points("short.", n).is_empty());
    }
}
