use formula_cards::card::Face;
use formula_cards::controller::{shortcut_action, FocusTarget, Session, ViewerAction};
use formula_cards::defaults::{ID_PLACEHOLDER, INVALID_ID_PLACEHOLDER};
use formula_cards::{read_records_from_json_str, ViewerConfig};

const FORMULAS: &str = r#"[
    {"id": "0-01", "title": "用語解説：極限", "formula": "\\lim_{x \\to a} f(x)", "comment": "limit"},
    {"id": "0-02", "title": "用語解説：微分", "formula": "f'(x) \\\\ = \\frac{df}{dx}", "comment": "<i>derivative</i>"},
    {"id": "1-01", "title": "公式：オイラー", "formula": "e^{i\\pi} + 1 = 0", "comment": "Euler"}
]"#;

fn press(session: &Session, key: &str) -> Session {
    let action = shortcut_action(key, FocusTarget::Other).expect("key is bound");
    session.reduce(action)
}

#[test]
fn browse_reveal_and_reject_unknown_id() {
    let config = ViewerConfig::default();
    let store = read_records_from_json_str(FORMULAS).unwrap();
    let session = Session::new(store);

    let view = session.view(&config);
    assert_eq!(view.label, "0-01: 用語解説：極限");
    assert!(view.detail.is_none());
    assert!(view.comment.is_none());

    let session = press(&session, "n");
    let view = session.view(&config);
    assert_eq!(view.label, "0-01: 用語解説：極限");
    assert!(view.detail.unwrap().contains("\\lim_{x \\to a} f(x)"));
    assert_eq!(view.comment.as_deref(), Some("limit"));

    let session = press(&session, "n");
    let view = session.view(&config);
    assert_eq!(view.label, "0-02: 用語解説：微分");
    assert!(view.detail.is_none());
    assert!(view.comment.is_none());

    let session = session
        .reduce(ViewerAction::FieldInput("9-99".to_string()))
        .reduce(ViewerAction::SubmitJump);
    assert_eq!(session.field.value, "");
    assert_eq!(session.field.placeholder(), INVALID_ID_PLACEHOLDER);
    assert_eq!(session.view(&config).label, "0-02: 用語解説：微分");
    assert_eq!(session.card.face, Face::Hidden);
}

#[test]
fn index_drives_jumps() {
    let store = read_records_from_json_str(FORMULAS).unwrap();
    let session = Session::new(store);

    let titles: Vec<&str> = session
        .index
        .categories
        .iter()
        .map(|c| c.display_title.as_str())
        .collect();
    assert_eq!(titles, ["0. 用語解説", "1. 公式"]);

    let target = session.index.categories[1].items[0].id.clone();
    let session = press(&session, "n").reduce(ViewerAction::IndexJump(target));
    assert_eq!(session.card.current_index, 2);
    assert_eq!(session.card.face, Face::Hidden);
    assert_eq!(session.field.placeholder(), ID_PLACEHOLDER);
}

#[test]
fn retreat_wraps_to_last_card() {
    let store = read_records_from_json_str(FORMULAS).unwrap();
    let session = press(&press(&Session::new(store), "b"), "B");
    assert_eq!(session.card.current_index, 2);
    assert_eq!(session.card.face, Face::Hidden);
}
