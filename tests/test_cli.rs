use notehub::cli::args::{Args, Command};
use notehub::domain::Tag;
use clap::Parser;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notehub", "--token", "abc"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_uses_defaults() {
    // Arrange
    let args = vec!["notehub", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List {
            search,
            page,
            per_page,
            tag,
            json,
        } => {
            assert_eq!(search, None);
            assert_eq!(page, 1);
            assert_eq!(per_page, None);
            assert_eq!(tag, None);
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.token, None);
    assert_eq!(parsed.base_url, None);
}

#[test]
fn given_list_with_options_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "notehub", "list", "milk", "--page", "3", "--per-page", "10", "--tag", "Shopping", "--json",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List {
            search,
            page,
            per_page,
            tag,
            json,
        } => {
            assert_eq!(search.as_deref(), Some("milk"));
            assert_eq!(page, 3);
            assert_eq!(per_page, Some(10));
            assert_eq!(tag, Some(Tag::Shopping));
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_unknown_tag_filter_when_parsing_list_then_fails() {
    let args = vec!["notehub", "list", "--tag", "Urgent"];

    let result = Args::try_parse_from(args);

    assert!(result.is_err());
}

#[test]
fn given_create_command_with_fields_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "notehub", "create", "-t", "Buy milk", "-c", "2% milk, 1 gal", "--tag", "Shopping",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Create {
            title,
            content,
            tag,
            loose_tags,
            json,
        } => {
            assert_eq!(title.as_deref(), Some("Buy milk"));
            assert_eq!(content.as_deref(), Some("2% milk, 1 gal"));
            assert_eq!(tag.as_deref(), Some("Shopping"));
            assert!(!loose_tags);
            assert!(!json);
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn given_create_with_free_tag_when_parsing_then_tag_is_left_to_validation() {
    let args = vec!["notehub", "create", "--tag", "Urgent", "--loose-tags"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Create {
            tag, loose_tags, ..
        } => {
            assert_eq!(tag.as_deref(), Some("Urgent"));
            assert!(loose_tags);
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn given_delete_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notehub", "delete", "65ca67e7ae7f10c88b598384"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id, json } => {
            assert_eq!(note_id, "65ca67e7ae7f10c88b598384");
            assert!(!json);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec![
        "notehub",
        "delete",
        "--token",
        "secret",
        "--base-url",
        "http://localhost:3000/api",
        "abc",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Delete { ref note_id, .. } if note_id == "abc"));
    assert_eq!(parsed.token.as_deref(), Some("secret"));
    assert_eq!(parsed.base_url.as_deref(), Some("http://localhost:3000/api"));
}

#[test]
fn given_config_flag_when_parsing_then_sets_path() {
    let args = vec!["notehub", "--config", "/tmp/notehub.toml", "tags"];

    let parsed = Args::try_parse_from(args).unwrap();

    assert!(matches!(parsed.command, Command::Tags));
    assert_eq!(
        parsed.config,
        Some(std::path::PathBuf::from("/tmp/notehub.toml"))
    );
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["notehub", "-vv", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_init_command_when_parsing_then_force_defaults_to_false() {
    let parsed = Args::try_parse_from(["notehub", "init"]).unwrap();

    assert!(matches!(parsed.command, Command::Init { force: false }));
}

#[test]
fn given_init_with_force_and_config_when_parsing_then_succeeds() {
    let parsed =
        Args::try_parse_from(["notehub", "init", "--force", "--config", "/tmp/n.toml"]).unwrap();

    assert!(matches!(parsed.command, Command::Init { force: true }));
    assert_eq!(parsed.config, Some(std::path::PathBuf::from("/tmp/n.toml")));
}
