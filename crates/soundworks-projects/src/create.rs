//! Project creation prompts

use camino::{Utf8Path, Utf8PathBuf};
use soundworks_core::{AnswerProvider, Choice, Question};

use crate::error::{Error, Result};
use crate::templates::{Template, TemplateCatalog};

/// Where and from what a project is created
#[derive(Debug, Clone)]
pub struct ProjectPlan<'a> {
    pub name: String,
    pub target_dir: Utf8PathBuf,
    pub template: &'a Template,
}

/// Resolve the directory receiving the project
///
/// `requested` comes from the command line. When absent or `.`, the user is
/// asked; a blank answer keeps the current directory. Relative answers are
/// resolved against `cwd`.
pub fn resolve_target_dir(
    cwd: &Utf8Path,
    requested: Option<&str>,
    answers: &dyn AnswerProvider,
) -> Result<Utf8PathBuf> {
    let requested = match requested.map(str::trim) {
        Some(dir) if !dir.is_empty() && dir != "." => dir.to_string(),
        _ => answers.text(Question::text(
            "Where should we create your project? (leave blank to use current directory)",
        ))?,
    };

    let requested = requested.trim();
    if requested.is_empty() || requested == "." {
        return Ok(cwd.to_path_buf());
    }

    let dir = Utf8Path::new(requested);
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(cwd.join(dir))
    }
}

/// Pick the template to scaffold from
///
/// An explicit name must exist. A single available template is used without
/// asking.
pub fn choose_template<'a>(
    catalog: &'a TemplateCatalog,
    requested: Option<&str>,
    answers: &dyn AnswerProvider,
) -> Result<&'a Template> {
    if let Some(name) = requested {
        return catalog.find(name);
    }

    match catalog.templates() {
        [] => Err(Error::no_templates("<bundled>")),
        [only] => Ok(only),
        templates => {
            let choices = templates
                .iter()
                .map(|t| {
                    Choice::titled(
                        format!("{} - {} ({})", t.name(), t.infos.description, t.package),
                        t.name(),
                    )
                })
                .collect();

            let name = answers.select(Question::select(
                "Which template do you want to use?",
                choices,
            ))?;
            catalog.find(&name)
        }
    }
}

/// Ask everything needed to create a project
pub fn plan_project<'a>(
    cwd: &Utf8Path,
    requested_dir: Option<&str>,
    requested_template: Option<&str>,
    catalog: &'a TemplateCatalog,
    answers: &dyn AnswerProvider,
) -> Result<ProjectPlan<'a>> {
    let target_dir = resolve_target_dir(cwd, requested_dir, answers)?;
    if soundworks_core::utils::is_non_empty_dir(&target_dir)? {
        return Err(Error::directory_not_empty(target_dir.as_str()));
    }

    let name = target_dir
        .file_name()
        .map(ToString::to_string)
        .ok_or_else(|| {
            soundworks_core::Error::invalid_config(format!(
                "Cannot name a project after {}",
                target_dir
            ))
        })?;

    let template = choose_template(catalog, requested_template, answers)?;

    Ok(ProjectPlan {
        name,
        target_dir,
        template,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundworks_core::{Answer, ScriptedAnswers};
    use std::fs;
    use tempfile::TempDir;

    fn cwd() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        (temp, root)
    }

    #[test]
    fn test_explicit_dir_is_not_prompted() {
        let (_temp, root) = cwd();
        let answers = ScriptedAnswers::new(Vec::<Answer>::new());

        let dir = resolve_target_dir(&root, Some("my-app"), &answers).unwrap();
        assert_eq!(dir, root.join("my-app"));
    }

    #[test]
    fn test_blank_answer_keeps_cwd() {
        let (_temp, root) = cwd();
        let answers = ScriptedAnswers::new([""]);

        assert_eq!(resolve_target_dir(&root, None, &answers).unwrap(), root);
    }

    #[test]
    fn test_dot_prompts_for_dir() {
        let (_temp, root) = cwd();
        let answers = ScriptedAnswers::new(["nested/app"]);

        let dir = resolve_target_dir(&root, Some("."), &answers).unwrap();
        assert_eq!(dir, root.join("nested/app"));
    }

    #[test]
    fn test_single_template_is_chosen_silently() {
        let catalog = TemplateCatalog::load(None).unwrap();
        let answers = ScriptedAnswers::new(Vec::<Answer>::new());

        if catalog.len() == 1 {
            assert_eq!(choose_template(&catalog, None, &answers).unwrap().name(), "js");
        }
        assert!(choose_template(&catalog, Some("unknown"), &answers).is_err());
    }

    #[test]
    fn test_several_templates_are_prompted() {
        let (_temp, root) = cwd();
        fs::create_dir_all(root.join("extra")).unwrap();
        fs::write(
            root.join("extra/template-infos.json"),
            r#"{ "name": "extra", "clients": [] }"#,
        )
        .unwrap();

        let catalog = TemplateCatalog::load(Some(&root)).unwrap();
        let answers = ScriptedAnswers::new([Answer::Choice("extra".into())]);

        assert_eq!(choose_template(&catalog, None, &answers).unwrap().name(), "extra");
    }

    #[test]
    fn test_plan_refuses_non_empty_dir() {
        let (_temp, root) = cwd();
        fs::create_dir_all(root.join("taken")).unwrap();
        fs::write(root.join("taken/file"), "").unwrap();

        let catalog = TemplateCatalog::load(None).unwrap();
        let answers = ScriptedAnswers::new(Vec::<Answer>::new());

        let err = plan_project(&root, Some("taken"), None, &catalog, &answers).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotEmpty { .. }));
    }

    #[test]
    fn test_plan_names_project_after_dir() {
        let (_temp, root) = cwd();
        let catalog = TemplateCatalog::load(None).unwrap();
        let answers = ScriptedAnswers::new(Vec::<Answer>::new());

        let plan = plan_project(&root, Some("my-app"), Some("js"), &catalog, &answers).unwrap();
        assert_eq!(plan.name, "my-app");
        assert_eq!(plan.target_dir, root.join("my-app"));
        assert_eq!(plan.template.name(), "js");
    }
}
