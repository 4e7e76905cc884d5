//! Configuration loading through serde.
#![cfg(feature = "serde")]

use cohort::{Error, Louvain};

#[test]
fn partial_config_falls_back_to_defaults() {
    let louvain: Louvain = serde_json::from_str(r#"{ "resolution": 0.5, "max_levels": 8 }"#).unwrap();
    let expected = Louvain::new().with_resolution(0.5).with_max_levels(8);
    assert_eq!(louvain, expected);
    assert_eq!(louvain.max_passes(), Louvain::new().max_passes());
}

#[test]
fn loaded_config_is_validated_before_running() {
    let louvain: Louvain = serde_json::from_str(r#"{ "max_passes": 0 }"#).unwrap();
    assert_eq!(
        louvain.validate(),
        Err(Error::InvalidParameter {
            name: "max_passes",
            message: "must be at least 1"
        })
    );
}
