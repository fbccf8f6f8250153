//! Learning roadmap for the requirements a profile is missing.

use serde::Serialize;

use crate::matching::MatchResult;
use crate::models::profile::ProficiencyLevel;
use crate::models::role::RoleRequirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Mandatory,
    Optional,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapStep {
    /// 1-based.
    pub step: usize,
    pub skill: String,
    pub priority: Priority,
    pub required_level: ProficiencyLevel,
    pub suggested_actions: Vec<String>,
    pub estimated_duration: &'static str,
}

const LEARNING_RESOURCES: &[(&str, &[&str])] = &[
    ("python", &["Complete a Python fundamentals course", "Solve daily practice problems in Python"]),
    ("statistics", &["Take the Khan Academy or Coursera statistics track", "Run hypothesis tests on a public dataset"]),
    ("machine learning", &["Follow the Coursera Machine Learning course", "Work through the scikit-learn tutorials"]),
    ("deep learning", &["Take a TensorFlow or PyTorch course", "Reproduce a published model from its paper"]),
    ("data analysis", &["Study the pandas and NumPy documentation", "Analyze a Kaggle dataset end to end"]),
    ("sql", &["Practice queries against a sample database", "Learn joins, window functions and indexing"]),
    ("javascript", &["Work through the MDN JavaScript guide", "Build an interactive page without a framework"]),
    ("react", &["Complete the official React tutorial", "Build a single-page app with React"]),
    ("node.js", &["Build a REST service with Node.js and Express", "Read the Node.js event loop guide"]),
    ("html", &["Work through the MDN HTML reference", "Rebuild a real landing page from scratch"]),
    ("css", &["Learn flexbox and grid layouts", "Style a responsive portfolio site"]),
    ("rest api", &["Design and document a small REST API", "Add pagination and error handling to it"]),
    ("git", &["Practice branching and rebasing workflows", "Contribute a pull request to an open-source project"]),
    ("docker", &["Read the Docker documentation", "Containerize an existing project with hands-on labs"]),
    ("kubernetes", &["Read the Kubernetes docs and take a KodeKloud course", "Deploy a multi-service app to a local cluster"]),
    ("aws", &["Use the AWS Free Tier for hands-on labs", "Follow an A Cloud Guru course"]),
    ("linux", &["Learn the Linux command line", "Administer a personal Linux server"]),
    ("bash", &["Automate a daily task with a Bash script", "Learn error handling with set -euo pipefail"]),
    ("ci/cd", &["Set up a pipeline with GitHub Actions or GitLab CI", "Add automated tests and deploys to it"]),
    ("system design", &["Study common system design case studies", "Write a design document for a scalable service"]),
    ("microservices", &["Split a monolith sample app into services", "Learn service discovery and API gateways"]),
    ("pytorch", &["Complete the official PyTorch tutorials", "Train and evaluate a model on a public dataset"]),
    ("tensorflow", &["Complete the TensorFlow tutorials", "Deploy a trained model with TensorFlow Serving"]),
];

pub fn estimated_duration(level: ProficiencyLevel) -> &'static str {
    match level {
        ProficiencyLevel::Beginner => "2-4 weeks",
        ProficiencyLevel::Intermediate => "4-8 weeks",
        ProficiencyLevel::Expert => "8-12 weeks",
    }
}

fn suggested_actions(requirement: &RoleRequirement) -> Vec<String> {
    let skill = requirement.skill.as_str();
    let mut actions: Vec<String> = LEARNING_RESOURCES
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, actions)| actions.iter().map(|a| a.to_string()).collect())
        .unwrap_or_else(|| {
            vec![
                format!("Work through {skill} tutorials, courses and documentation"),
                format!(
                    "Build a small project that uses {skill} at {} level",
                    requirement.required_level.as_str()
                ),
            ]
        });

    if requirement.required_level == ProficiencyLevel::Expert {
        actions.push(format!(
            "Showcase advanced {skill} work in a portfolio project"
        ));
    }
    actions
}

/// One step per missing requirement, mandatory first, catalog order within each group,
/// truncated to `cap` steps.
pub fn build_roadmap(result: &MatchResult<'_>, cap: usize) -> Vec<RoadmapStep> {
    result
        .missing()
        .take(cap)
        .enumerate()
        .map(|(idx, requirement)| RoadmapStep {
            step: idx + 1,
            skill: requirement.skill.clone(),
            priority: if requirement.mandatory {
                Priority::Mandatory
            } else {
                Priority::Optional
            },
            required_level: requirement.required_level,
            suggested_actions: suggested_actions(requirement),
            estimated_duration: estimated_duration(requirement.required_level),
        })
        .collect()
}
