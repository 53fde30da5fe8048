use ui::content::{self, asset_path};

#[test]
fn nav_anchors_resolve_to_sections() {
    for link in content::NAV_LINKS {
        let anchor = link
            .anchor
            .strip_prefix('#')
            .unwrap_or_else(|| panic!("anchor `{}` is missing the fragment prefix", link.anchor));
        assert!(
            content::SECTION_IDS.contains(&anchor),
            "nav link `{}` points at `{}` but no section has that id",
            link.label,
            anchor,
        );
    }
}

#[test]
fn nav_covers_every_section() {
    for id in content::SECTION_IDS {
        assert!(
            content::NAV_LINKS.iter().any(|link| link.anchor[1..] == *id),
            "section `{id}` is unreachable from the nav",
        );
    }
}

#[test]
fn every_sub_project_has_bullets() {
    for entry in content::EXPERIENCE {
        assert!(
            !entry.sub_projects.is_empty(),
            "{} has no sub-projects",
            entry.company
        );
        for project in entry.sub_projects {
            assert!(
                !project.bullets.is_empty(),
                "{} / `{}` has an empty bullet list",
                entry.company,
                project.name
            );
        }
    }
}

// The anonymous sub-project (empty name) must still carry its bullets;
// the timeline renders them without a sub-heading.
#[test]
fn anonymous_sub_projects_keep_their_bullets() {
    let anonymous = content::EXPERIENCE
        .iter()
        .flat_map(|entry| entry.sub_projects)
        .find(|project| project.name.is_empty())
        .expect("catalog should keep a role with an unnamed project");
    assert!(!anonymous.bullets.is_empty());
}

#[test]
fn asset_path_normalizes_leading_slash() {
    assert_eq!(asset_path("deco.webp"), "/assets/img/deco.webp");
    assert_eq!(asset_path("/deco.webp"), "/assets/img/deco.webp");
}

#[test]
fn project_images_resolve_under_the_assets_mount() {
    for project in content::PROJECTS {
        if let Some(image) = project.image {
            let resolved = asset_path(image);
            assert!(
                resolved.starts_with("/assets/img/") && !resolved["/assets/img/".len()..].contains('/'),
                "{}: `{image}` resolved to `{resolved}`",
                project.title,
            );
        }
    }
}

// A project with no external links renders an overlay with nothing
// interactive in it, so the catalog is allowed to keep such entries.
#[test]
fn catalog_keeps_projects_without_links() {
    assert!(content::PROJECTS.iter().any(|p| p.links.is_empty()));
}

#[test]
fn link_kinds_have_labels() {
    for project in content::PROJECTS {
        for link in project.links {
            assert!(!link.kind.label().is_empty());
            assert!(link.url.starts_with("https://"), "{}", link.url);
        }
    }
}
