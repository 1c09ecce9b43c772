use topcharts::extract::flatten;
use topcharts::types::{
    AnalysisSummary, AudioFeatures, ChartTable, EnrichedTrack, GLOBAL_MARKET, MarketChart, Track,
};

// Helper function to create test audio features
fn create_test_features(seed: f64) -> AudioFeatures {
    AudioFeatures {
        acousticness: 0.1 + seed,
        danceability: 0.2 + seed,
        duration_ms: 200_000,
        energy: 0.3 + seed,
        instrumentalness: 0.01 + seed,
        liveness: 0.15 + seed,
        loudness: -7.5 + seed,
        speechiness: 0.05 + seed,
        tempo: 120.0 + seed,
        valence: 0.4 + seed,
    }
}

// Helper function to create a test analysis summary
fn create_test_analysis(sections: usize, segments: usize) -> AnalysisSummary {
    AnalysisSummary {
        end_of_fade_in: 0.2,
        start_of_fade_out: 180.0,
        sections_number: sections,
        segments_number: segments,
    }
}

// Helper function to create an enriched test track
fn create_test_track(id: &str, name: &str, artists: &[(&str, u64)]) -> EnrichedTrack {
    EnrichedTrack {
        track: Track {
            id: id.to_string(),
            name: name.to_string(),
            artists: artists.iter().map(|(n, _)| n.to_string()).collect(),
            artists_followers: artists.iter().map(|(_, f)| *f).collect(),
            album: format!("{} Album", name),
            release_date: "2023-10-01".to_string(),
            popularity: 75,
        },
        features: create_test_features(0.0),
        analysis: create_test_analysis(8, 400),
    }
}

// Helper function to create a chart with n generated tracks
fn create_test_chart(market: &str, count: usize) -> MarketChart {
    MarketChart {
        market: market.to_string(),
        tracks: (0..count)
            .map(|i| {
                create_test_track(
                    &format!("{}_{}", market, i),
                    &format!("Song {} {}", market, i),
                    &[("Artist A", 1000), ("Artist B", 500)],
                )
            })
            .collect(),
    }
}

fn column_lengths(table: &ChartTable) -> Vec<usize> {
    vec![
        table.market.len(),
        table.rank.len(),
        table.name.len(),
        table.artists.len(),
        table.artists_followers.len(),
        table.id.len(),
        table.album.len(),
        table.release_date.len(),
        table.popularity.len(),
        table.acousticness.len(),
        table.danceability.len(),
        table.duration_ms.len(),
        table.energy.len(),
        table.instrumentalness.len(),
        table.liveness.len(),
        table.loudness.len(),
        table.speechiness.len(),
        table.tempo.len(),
        table.valence.len(),
        table.end_of_fade_in.len(),
        table.start_of_fade_out.len(),
        table.sections_number.len(),
        table.segments_number.len(),
    ]
}

#[test]
fn test_row_count_matches_total_tracks() {
    let charts = vec![
        create_test_chart(GLOBAL_MARKET, 3),
        create_test_chart("DE", 2),
        create_test_chart("FR", 4),
    ];

    let table = flatten(&charts);

    // One row per track across all markets
    assert_eq!(table.len(), 9);

    // Every column has the same length
    for length in column_lengths(&table) {
        assert_eq!(length, 9);
    }
}

#[test]
fn test_rank_restarts_per_market() {
    let charts = vec![create_test_chart(GLOBAL_MARKET, 3), create_test_chart("DE", 2)];

    let table = flatten(&charts);

    // Rank is 1-based per market, independent of global numbering
    assert_eq!(table.rank, vec![1, 2, 3, 1, 2]);
    assert_eq!(
        table.market,
        vec!["GLOBAL", "GLOBAL", "GLOBAL", "DE", "DE"]
    );
}

#[test]
fn test_market_order_is_preserved() {
    let charts = vec![
        create_test_chart(GLOBAL_MARKET, 1),
        create_test_chart("SE", 1),
        create_test_chart("DE", 1),
    ];

    let table = flatten(&charts);

    // Input order is authoritative, no sorting happens
    assert_eq!(table.market, vec!["GLOBAL", "SE", "DE"]);
}

#[test]
fn test_artists_and_followers_stay_parallel() {
    let charts = vec![MarketChart {
        market: "DE".to_string(),
        tracks: vec![
            create_test_track("t1", "Solo", &[("X", 100)]),
            create_test_track("t2", "Duet", &[("X", 100), ("Y", 200)]),
            create_test_track("t3", "Trio", &[("X", 100), ("Y", 200), ("Z", 300)]),
        ],
    }];

    let table = flatten(&charts);

    for row in 0..table.len() {
        assert_eq!(table.artists[row].len(), table.artists_followers[row].len());
    }
    assert_eq!(table.artists[1], vec!["X", "Y"]);
    assert_eq!(table.artists_followers[1], vec![100, 200]);
}

#[test]
fn test_flatten_is_pure() {
    let charts = vec![create_test_chart(GLOBAL_MARKET, 2), create_test_chart("FR", 3)];

    // Same input twice yields identical output, no hidden state
    assert_eq!(flatten(&charts), flatten(&charts));
}

#[test]
fn test_single_global_track_scenario() {
    let charts = vec![MarketChart {
        market: GLOBAL_MARKET.to_string(),
        tracks: vec![EnrichedTrack {
            track: Track {
                id: "a".to_string(),
                name: "Song A".to_string(),
                artists: vec!["X".to_string()],
                artists_followers: vec![100],
                album: "Alb".to_string(),
                release_date: "2020".to_string(),
                popularity: 80,
            },
            features: create_test_features(0.0),
            analysis: AnalysisSummary {
                end_of_fade_in: 0.2,
                start_of_fade_out: 180.0,
                sections_number: 5,
                segments_number: 50,
            },
        }],
    }];

    let table = flatten(&charts);

    assert_eq!(table.len(), 1);
    assert_eq!(table.market[0], "GLOBAL");
    assert_eq!(table.rank[0], 1);
    assert_eq!(table.name[0], "Song A");
    assert_eq!(table.id[0], "a");
    assert_eq!(table.album[0], "Alb");
    assert_eq!(table.release_date[0], "2020");
    assert_eq!(table.popularity[0], 80);
    assert_eq!(table.sections_number[0], 5);
    assert_eq!(table.segments_number[0], 50);
    assert_eq!(table.end_of_fade_in[0], 0.2);
    assert_eq!(table.start_of_fade_out[0], 180.0);
}

#[test]
fn test_empty_charts_flatten_to_empty_table() {
    let table = flatten(&[]);

    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_table_rows_join_artist_names() {
    let charts = vec![MarketChart {
        market: "DE".to_string(),
        tracks: vec![create_test_track("t1", "Duet", &[("X", 100), ("Y", 200)])],
    }];

    let rows = flatten(&charts).table_rows();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].market, "DE");
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].name, "Duet");
    assert_eq!(rows[0].artists, "X, Y");
}
