//! Data used in tests.

use crate::observation::RawObservation;

/// Name, latitude, longitude, and the expected grid cell for a few well known places.
pub const STATIONS: &[(&str, f64, f64, i32, i32)] = &[
    ("Seoul", 37.5665, 126.9780, 60, 127),
    ("Busan", 35.1796, 129.0756, 98, 76),
    ("Jeju", 33.4996, 126.5312, 53, 38),
    ("Daejeon", 36.3504, 127.3845, 67, 100),
    ("Incheon", 37.4563, 126.7052, 55, 124),
    ("Gwangju", 35.1595, 126.8526, 58, 74),
    ("Ulleungdo", 37.4844, 130.9057, 127, 127),
    ("Baengnyeongdo", 37.9592, 124.6653, 20, 135),
];

/// A short batch for the Seoul cell as the service orders it: by forecast time, then category.
pub fn morning_batch() -> Vec<RawObservation> {
    let rows: &[(&str, &str, &str, &str)] = &[
        ("20240301", "0600", "TMP", "-1"),
        ("20240301", "0600", "UUU", "1.2"),
        ("20240301", "0600", "VVV", "-0.4"),
        ("20240301", "0600", "VEC", "289"),
        ("20240301", "0600", "WSD", "1.3"),
        ("20240301", "0600", "SKY", "1"),
        ("20240301", "0600", "PTY", "0"),
        ("20240301", "0600", "POP", "0"),
        ("20240301", "0600", "PCP", "강수없음"),
        ("20240301", "0600", "REH", "70"),
        ("20240301", "0600", "SNO", "적설없음"),
        ("20240301", "0600", "TMN", "-2.0"),
        ("20240301", "0700", "TMP", "-2"),
        ("20240301", "0700", "VEC", "275"),
        ("20240301", "0700", "WSD", "1.1"),
        ("20240301", "0700", "SKY", "3"),
        ("20240301", "0700", "PTY", "0"),
        ("20240301", "0700", "REH", "75"),
        ("20240301", "0800", "TMP", "0"),
        ("20240301", "0800", "VEC", "40"),
        ("20240301", "0800", "WSD", "0.8"),
        ("20240301", "0800", "SKY", "4"),
        ("20240301", "0800", "PTY", "3"),
        ("20240301", "0800", "REH", "90"),
    ];

    rows.iter()
        .map(|&(date, time, code, val)| {
            RawObservation::new("20240301", "0500", date, time, code, val).with_cell(60, 127)
        })
        .collect()
}
