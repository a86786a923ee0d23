use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_renderer::{render_page, ContentStore, Language, Page};

fn bench_render_all_pages(c: &mut Criterion) {
    let store = ContentStore::embedded().expect("embedded content");

    c.bench_function("render_all_pages_both_languages", |b| {
        b.iter(|| {
            for lang in Language::ALL {
                for page in Page::ALL {
                    black_box(render_page(black_box(page), lang, &store));
                }
            }
        })
    });

    c.bench_function("render_skills_en", |b| {
        b.iter(|| black_box(render_page(Page::Skills, Language::En, &store)))
    });
}

criterion_group!(benches, bench_render_all_pages);
criterion_main!(benches);
