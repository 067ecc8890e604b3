use criterion::{black_box, criterion_group, criterion_main, Criterion};
use copic_wheel::{BandSampler, Catalog, CodeScheme, ColorEntry};
use image::{Rgb, RgbImage};

fn bench_band_sampling(c: &mut Criterion) {
    // Sample-image sized input: 600x400, three flat bands
    let image = RgbImage::from_fn(600, 400, |x, _| match x / 200 {
        0 => Rgb([200, 60, 40]),
        1 => Rgb([220, 120, 90]),
        _ => Rgb([240, 190, 160]),
    });
    let sampler = BandSampler::new();

    c.bench_function("sample_three_bands", |b| {
        b.iter(|| sampler.sample(black_box(&image)).unwrap())
    });
}

fn bench_hue_list(c: &mut Criterion) {
    let scheme = CodeScheme::copic();
    let mut catalog = Catalog::new();
    for family in ["B", "BV", "V", "RV", "R", "YR", "Y", "YG", "G", "BG"] {
        for group in 0..4 {
            for intensity in 0..10 {
                let code = format!("{}{}{}", family, group, intensity);
                catalog.insert(
                    code.clone(),
                    ColorEntry::new(
                        [
                            "#111111".to_string(),
                            "#222222".to_string(),
                            "#333333".to_string(),
                        ],
                        code,
                    ),
                );
            }
        }
    }

    c.bench_function("hue_list_400_codes", |b| {
        b.iter(|| scheme.hue_list(black_box(&catalog), true).unwrap())
    });
}

criterion_group!(benches, bench_band_sampling, bench_hue_list);
criterion_main!(benches);
