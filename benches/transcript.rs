use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ecb_scrape::config::{Alignment, SiteConfig};
use ecb_scrape::specs::{index::parse_index, transcript::extract_transcript};

/// Synthetic conference page roughly the size of a long real transcript.
fn sample_page() -> String {
    let mut html = String::from(
        "<html><body><main><div class=\"title\"><h1>Monetary policy statement</h1></div>",
    );
    for i in 0..40 {
        html.push_str(&format!("<div class=\"section\"><p>Statement paragraph {i}. </p></div>"));
    }
    html.push_str("<div class=\"section\"><p>Jump to the transcript of the questions and answers</p></div>");
    for i in 0..120 {
        html.push_str(&format!(
            "<div class=\"section\"><p><strong>Question {i}:</strong> Why?</p><p>Answer {i}.</p></div>"
        ));
    }
    html.push_str("<div class=\"address-box\">European Central Bank</div></main></body></html>");
    html
}

fn sample_index() -> String {
    let mut html = String::from("<dl>");
    for i in 0..30 {
        html.push_str(&format!(
            "<dt>{i} January 2024</dt><dd><div class=\"title\"><a href=\"/press/{i}.en.html\">Conference {i}</a></div></dd>"
        ));
    }
    html.push_str("</dl>");
    html
}

fn bench_pages(c: &mut Criterion) {
    let site = SiteConfig::default();
    let page = sample_page();
    let index = sample_index();

    c.bench_function("extract_transcript", |b| {
        b.iter(|| {
            let text = extract_transcript(black_box(&page), &site).unwrap();
            black_box(text.len())
        })
    });

    c.bench_function("parse_index", |b| {
        b.iter(|| {
            let records = parse_index(black_box(&index), &site, Alignment::Strict, "bench").unwrap();
            black_box(records.len())
        })
    });
}

criterion_group!(benches, bench_pages);
criterion_main!(benches);
