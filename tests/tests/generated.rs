use plate_codegen::Config;
use pretty_assertions::assert_eq;
use quote::ToTokens;
use std::path::Path;
use tests::models;

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Token text without whitespace or trailing commas, so the committed
/// formatted output compares equal to freshly generated tokens.
fn normalize(file: &syn::File) -> Vec<String> {
    file.items
        .iter()
        .map(|item| {
            let text: String = item
                .to_token_stream()
                .to_string()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();

            text.replace(",)", ")").replace(",}", "}")
        })
        .collect()
}

#[test]
fn committed_modules_are_up_to_date() {
    let config = Config::from_file(manifest_dir().join("plate.toml")).unwrap();
    let generated = plate_codegen::generate(&config).unwrap();

    let db = manifest_dir().join("src/db");
    let mut committed = std::fs::read_dir(&db)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    committed.sort();

    let paths: Vec<_> = generated.paths().map(|p| p.display().to_string()).collect();
    assert_eq!(paths, committed);

    for path in &paths {
        let expected = syn::parse_file(generated.get(path).unwrap()).unwrap();
        let actual = syn::parse_file(&std::fs::read_to_string(db.join(path)).unwrap()).unwrap();

        assert_eq!(normalize(&actual), normalize(&expected), "{path} is stale");
    }
}

#[test]
fn derive_lists_column_fields() {
    assert_eq!(
        models::User::COLUMNS,
        [
            ("id", "id", "INT64"),
            ("name", "name", "STRING"),
            ("email", "email", "STRING"),
        ]
    );

    assert_eq!(
        models::Post::COLUMNS,
        [
            ("id", "id", "INT64"),
            ("user_id", "user_id", "INT64"),
            ("title", "title", "STRING"),
            ("created_at", "created_at", "TIMESTAMP"),
        ]
    );

    assert_eq!(models::Tag::COLUMNS, [("id", "id", "INT64"), ("name", "name", "STRING(64)")]);
}
