//! Fixed synonym table so profiles are not penalized for vocabulary mismatch with the catalog.

use std::collections::BTreeMap;

use crate::models::profile::ProficiencyLevel;

/// skill → skills it also credits. Targets are canonical lowercase names.
const ALIASES: &[(&str, &[&str])] = &[
    ("mysql", &["sql"]),
    ("postgresql", &["sql"]),
    ("postgres", &["postgresql"]),
    ("sqlite", &["sql"]),
    ("sql server", &["sql"]),
    ("sql optimization", &["sql"]),
    ("js", &["javascript"]),
    ("typescript", &["javascript"]),
    ("ts", &["typescript"]),
    ("reactjs", &["react"]),
    ("react.js", &["react"]),
    ("node", &["node.js"]),
    ("nodejs", &["node.js"]),
    ("vue", &["vue.js"]),
    ("vuejs", &["vue.js"]),
    ("golang", &["go"]),
    ("k8s", &["kubernetes"]),
    ("amazon web services", &["aws"]),
    ("aws ec2", &["aws"]),
    ("aws s3", &["aws"]),
    ("aws dynamodb", &["aws"]),
    ("gcp", &["google cloud"]),
    ("sklearn", &["scikit-learn"]),
    ("deep learning", &["machine learning"]),
    ("statistical analysis", &["statistics"]),
    ("restful api", &["rest api"]),
    ("rest", &["rest api"]),
    ("continuous integration", &["ci/cd"]),
    ("github actions", &["ci/cd"]),
    ("gitlab ci", &["ci/cd"]),
    ("jenkins", &["ci/cd"]),
    ("shell", &["bash"]),
];

fn targets_of(skill: &str) -> &'static [&'static str] {
    ALIASES
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, targets)| *targets)
        .unwrap_or(&[])
}

/// Adds alias targets until a fixpoint is reached.
///
/// An alias target inherits the proficiency of the skill that implied it, but never
/// overwrites a skill the user listed explicitly. Because expansion runs to a fixpoint,
/// expanding an already-expanded set changes nothing.
pub fn expand_aliases(skills: &mut BTreeMap<String, Option<ProficiencyLevel>>) {
    loop {
        let additions: Vec<(String, Option<ProficiencyLevel>)> = skills
            .iter()
            .flat_map(|(name, level)| {
                targets_of(name)
                    .iter()
                    .filter(|target| !skills.contains_key(**target))
                    .map(move |target| (target.to_string(), *level))
            })
            .collect();

        if additions.is_empty() {
            break;
        }

        for (name, level) in additions {
            skills.entry(name).or_insert(level);
        }
    }
}
