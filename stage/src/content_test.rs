use super::*;

#[test]
fn builtin_catalogue_parses() {
    let catalogue = Catalogue::builtin().unwrap();
    assert_eq!(catalogue.storytelling.projects.len(), 3);
    assert_eq!(catalogue.uiux.projects.len(), 3);
    assert_eq!(catalogue.storytelling.highlights.len(), 3);
    assert_eq!(catalogue.uiux.highlights.len(), 3);
}

#[test]
fn builtin_projects_keep_declared_order() {
    let catalogue = Catalogue::builtin().unwrap();
    let ids: Vec<u32> = catalogue.uiux.projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(catalogue.uiux.projects[1].title, "Mobile Banking App");
}

#[test]
fn showcase_by_view() {
    let catalogue = Catalogue::builtin().unwrap();
    assert_eq!(catalogue.showcase(ContentView::Storytelling).title, "Storytelling");
    assert_eq!(catalogue.showcase(ContentView::Uiux).title, "UI/UX Design");
}

#[test]
fn malformed_json_is_rejected() {
    let err = Catalogue::from_json("{ not json").unwrap_err();
    assert!(matches!(err, StageError::Catalogue(_)));
}

#[test]
fn duplicate_project_ids_are_rejected() {
    let json = r#"{
        "storytelling": { "title": "S", "intro": "", "projects": [
            { "id": 1, "title": "a", "description": "", "image": "" },
            { "id": 1, "title": "b", "description": "", "image": "" }
        ] },
        "uiux": { "title": "U", "intro": "", "projects": [] }
    }"#;
    let err = Catalogue::from_json(json).unwrap_err();
    assert!(matches!(err, StageError::DuplicateProject { track: "storytelling", id: 1 }));
}

#[test]
fn optional_fields_default() {
    let json = r#"{
        "storytelling": { "title": "S", "intro": "", "projects": [
            { "id": 7, "title": "a", "description": "", "image": "" }
        ] },
        "uiux": { "title": "U", "intro": "", "projects": [] }
    }"#;
    let catalogue = Catalogue::from_json(json).unwrap();
    assert!(catalogue.storytelling.projects[0].tags.is_empty());
    assert!(catalogue.uiux.highlights.is_empty());
}
