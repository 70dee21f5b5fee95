//! Benchmarks for the release-name engine
//!
//! Covers the hot paths: title extraction, episode detection, and full
//! release-name assembly.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use releasekit_engine::{
    detect_episode_info, extract_movie_title_from_filename, generate_release_name, sanitize_title,
    AudioTrack, MediaAttributes, ReleaseNameRequest, VideoTrack,
};

fn full_media() -> MediaAttributes {
    MediaAttributes {
        video_tracks: vec![VideoTrack {
            codec: Some("HEVC".to_string()),
            width: Some(3840),
            height: Some(2160),
            hdr_format: Some("Dolby Vision / SMPTE ST 2086, HDR10 compatible".to_string()),
            ..VideoTrack::default()
        }],
        audio_tracks: vec![
            AudioTrack {
                codec: Some("E-AC-3".to_string()),
                channels: Some(6.into()),
                language: Some("fr".to_string()),
                title: Some("VFF".to_string()),
                ..AudioTrack::default()
            },
            AudioTrack {
                codec: Some("E-AC-3".to_string()),
                channels: Some(6.into()),
                language: Some("en".to_string()),
                title: Some("English".to_string()),
                ..AudioTrack::default()
            },
        ],
        ..MediaAttributes::new("Movie.2024.MULTi.2160p.NF.WEB-DL.DDP5.1.HEVC-TEAM.mkv")
    }
}

fn bench_sanitize_title(c: &mut Criterion) {
    c.bench_function("sanitize_title", |b| {
        b.iter(|| sanitize_title(black_box("L'étrange Noël de Monsieur Jack : le retour!")));
    });
}

fn bench_title_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_movie_title");
    group.bench_function("year_anchor", |b| {
        b.iter(|| {
            extract_movie_title_from_filename(black_box(
                "Iznogoud.2005.FRENCH.1080p.WEB-DL.H264.mkv",
            ))
        });
    });
    group.bench_function("tag_strip_fallback", |b| {
        b.iter(|| {
            extract_movie_title_from_filename(black_box("Some.Movie.FRENCH.1080p.WEB-DL.x264"))
        });
    });
    group.finish();
}

fn bench_episode_detection(c: &mut Criterion) {
    c.bench_function("detect_episode_info", |b| {
        b.iter(|| detect_episode_info(black_box("Breaking.Bad.S05E14.FRENCH.720p.HDTV.x264.mkv")));
    });
}

fn bench_generate_release_name(c: &mut Criterion) {
    let media = full_media();
    let mut request = ReleaseNameRequest::new("Some Movie", media);
    request.year = Some("2024".to_string());

    c.bench_function("generate_release_name", |b| {
        b.iter(|| generate_release_name(black_box(&request)));
    });
}

criterion_group!(
    benches,
    bench_sanitize_title,
    bench_title_extraction,
    bench_episode_detection,
    bench_generate_release_name
);
criterion_main!(benches);
