//! Loading detection results back through serde.
#![cfg(feature = "serde")]

use cohort::{Hierarchy, Louvain, Partition, WeightedGraph};

#[test]
fn saved_hierarchy_loads_back_unchanged() {
    let g = WeightedGraph::from_unweighted(
        6,
        [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5), (3, 5)],
    )
    .unwrap();
    let hierarchy = Louvain::new().run(&g).unwrap();
    let json = serde_json::to_string(&hierarchy).unwrap();
    let loaded: Hierarchy = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded.depth(), hierarchy.depth());
    assert_eq!(loaded.final_partition(), hierarchy.final_partition());
    assert!((loaded.modularity() - hierarchy.modularity()).abs() < 1e-12);
}

#[test]
fn hierarchy_without_levels_is_rejected() {
    let loaded = serde_json::from_str::<Hierarchy>(r#"{ "n_nodes": 3, "levels": [] }"#);
    assert!(loaded.is_err());
}

#[test]
fn hierarchy_levels_must_cover_every_node() {
    let json = r#"{
        "n_nodes": 3,
        "levels": [{
            "partition": { "communities": [[0, 1]], "labels": [0, 0] },
            "modularity": 0.0,
            "node_count": 2,
            "passes": 1
        }]
    }"#;
    assert!(serde_json::from_str::<Hierarchy>(json).is_err());
}

#[test]
fn partition_with_repeated_node_is_rejected() {
    let loaded = serde_json::from_str::<Partition>(r#"{ "communities": [[0, 0, 5]], "labels": [3] }"#);
    let err = loaded.unwrap_err().to_string();
    assert!(err.contains("more than one community"), "{err}");
}

#[test]
fn partition_labels_are_rebuilt_from_communities() {
    let loaded: Partition =
        serde_json::from_str(r#"{ "communities": [[2, 0], [1]], "labels": [7, 7, 7] }"#).unwrap();
    assert_eq!(loaded.labels(), &[0, 1, 0]);
    assert_eq!(loaded, Partition::from_communities(3, vec![vec![2, 0], vec![1]]).unwrap());
}
