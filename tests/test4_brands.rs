use yardage_tracker::ledger::{BrandUpdate, ClubLedger, UpdateScope};
use yardage_tracker::model::brand::{add_custom_brand, filter_brands, GOLF_BRANDS};
use yardage_tracker::model::club::{seed_clubs, IRON_IDS};

#[test]
fn test4_empty_query_returns_everything_sorted() {
    let custom = vec!["Maltby".to_string()];
    let brands = filter_brands(&custom, "");
    assert_eq!(brands.len(), GOLF_BRANDS.len() + 1);
    let mut sorted = brands.clone();
    sorted.sort();
    assert_eq!(brands, sorted);
    assert!(brands.contains(&"Maltby".to_string()));
}

#[test]
fn test4_filter_is_case_insensitive_substring() {
    let brands = filter_brands(&[], "tit");
    assert_eq!(brands, vec!["Titleist".to_string()]);

    let brands = filter_brands(&[], "GOLF");
    assert_eq!(
        brands,
        vec!["Edel Golf".to_string(), "LA Golf".to_string(), "Sub 70 Golf".to_string()]
    );

    assert!(filter_brands(&[], "zzz").is_empty());
}

#[test]
fn test4_custom_brand_add_trims_and_rejects_duplicates() {
    let mut custom = Vec::new();
    assert!(add_custom_brand(&mut custom, "  Maltby  "));
    assert_eq!(custom, vec!["Maltby".to_string()]);

    // already in the custom list
    assert!(!add_custom_brand(&mut custom, "Maltby"));
    // already built in
    assert!(!add_custom_brand(&mut custom, "Titleist"));
    // blank
    assert!(!add_custom_brand(&mut custom, "   "));
    assert_eq!(custom.len(), 1);

    // case-sensitive equality: a different casing is a different brand
    assert!(add_custom_brand(&mut custom, "maltby"));
}

#[test]
fn test4_iron_update_accepted_fans_out_over_the_set() {
    let mut ledger = ClubLedger::new(seed_clubs());
    let update = BrandUpdate {
        brand: "Titleist".to_string(),
        model: Some("T100".to_string()),
        degrees: None,
    };

    ledger.apply_brand("5iron", &update, UpdateScope::IronSet).unwrap();

    for id in IRON_IDS {
        let club = ledger.find(id).unwrap();
        assert_eq!(club.brand, "Titleist");
        assert_eq!(club.model.as_deref(), Some("T100"));
    }
    // everything outside the set is untouched
    assert_eq!(ledger.find("driver").unwrap().brand, "Mizuno");
    assert_eq!(ledger.find("pw").unwrap().brand, "Maltby");
}

#[test]
fn test4_iron_update_declined_touches_one_club() {
    let mut ledger = ClubLedger::new(seed_clubs());
    let update = BrandUpdate {
        brand: "Titleist".to_string(),
        model: Some("T100".to_string()),
        degrees: None,
    };

    ledger.apply_brand("5iron", &update, UpdateScope::Single).unwrap();

    assert_eq!(ledger.find("5iron").unwrap().brand, "Titleist");
    for id in IRON_IDS.iter().filter(|id| **id != "5iron") {
        assert_eq!(ledger.find(id).unwrap().brand, "Maltby");
    }
}

#[test]
fn test4_iron_scope_on_non_iron_falls_back_to_single() {
    let mut ledger = ClubLedger::new(seed_clubs());
    let update = BrandUpdate {
        brand: "Cobra".to_string(),
        model: None,
        degrees: None,
    };

    ledger.apply_brand("driver", &update, UpdateScope::IronSet).unwrap();
    assert_eq!(ledger.find("driver").unwrap().brand, "Cobra");
    assert_eq!(ledger.find("4iron").unwrap().brand, "Maltby");
}

#[test]
fn test4_wedge_degrees_regenerate_name() {
    let mut ledger = ClubLedger::new(seed_clubs());
    let update = BrandUpdate {
        brand: "Cleveland".to_string(),
        model: Some("RTX 6".to_string()),
        degrees: Some(52),
    };

    ledger.apply_brand("pw", &update, UpdateScope::Single).unwrap();

    let pw = ledger.find("pw").unwrap();
    assert_eq!(pw.name, "Pw - 52");
    assert_eq!(pw.degrees(), Some(52));
    assert_eq!(pw.brand, "Cleveland");
}

#[test]
fn test4_degrees_ignored_for_non_wedges() {
    let mut ledger = ClubLedger::new(seed_clubs());
    let update = BrandUpdate {
        brand: "PING".to_string(),
        model: None,
        degrees: Some(10),
    };

    ledger.apply_brand("driver", &update, UpdateScope::Single).unwrap();

    let driver = ledger.find("driver").unwrap();
    assert_eq!(driver.name, "Driver");
    assert_eq!(driver.degrees(), None);
}
