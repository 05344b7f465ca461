use crate::{TargetVersion, VersionFeature, VersionFeatureProvider};

#[test]
fn parses_dotted_and_numeric_forms() {
    assert_eq!("7.4".parse::<TargetVersion>().unwrap().id(), 70400);
    assert_eq!("8.0.12".parse::<TargetVersion>().unwrap().id(), 80012);
    assert_eq!("70100".parse::<TargetVersion>().unwrap(), TargetVersion::new(7, 1));
    assert_eq!(" 8 ".parse::<TargetVersion>().unwrap_err().0, "8");
}

#[test]
fn rejects_garbage() {
    let err = "seven".parse::<TargetVersion>().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid target version `seven`, expected `MAJOR.MINOR` or a numeric id like `70400`");
    assert!("7.400".parse::<TargetVersion>().is_err());
    assert!("7.4.1.1".parse::<TargetVersion>().is_err());
    assert!("500000.1".parse::<TargetVersion>().is_err());
}

#[test]
fn feature_gates_follow_version_order() {
    let php70 = TargetVersion::new(7, 0);
    assert!(php70.is_at_least(VersionFeature::ScalarTypes));
    assert!(!php70.is_at_least(VersionFeature::VoidType));
    assert!(!php70.is_at_least(VersionFeature::NullableType));

    let php72 = TargetVersion::new(7, 2);
    assert!(php72.is_at_least(VersionFeature::VoidType));
    assert!(php72.is_at_least(VersionFeature::ObjectType));
    assert!(!php72.is_at_least(VersionFeature::UnionTypes));

    assert!(TargetVersion::LATEST.is_at_least(VersionFeature::UnionTypes));
}

#[test]
fn display_uses_major_minor() {
    assert_eq!(TargetVersion::from_id(70412).to_string(), "7.4");
}

#[test]
fn serde_roundtrip_through_string() {
    let json = serde_json::to_string(&TargetVersion::new(7, 4)).unwrap();
    assert_eq!(json, r#""7.4""#);

    let parsed: TargetVersion = serde_json::from_str(r#""8.1""#).unwrap();
    assert_eq!(parsed, TargetVersion::new(8, 1));

    assert!(serde_json::from_str::<TargetVersion>(r#""eight""#).is_err());
}
