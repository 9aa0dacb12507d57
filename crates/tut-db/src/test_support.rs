//! Shared fixtures for tut-db unit tests.

use rstest::fixture;
use tut_core::entities::{NewTutorial, Tutorial};

use crate::service::TutorialService;

pub const PYTEST_DJANGO_DOCS: &str = "https://pytest-django.readthedocs.io/en/latest/index.html";

/// A fresh in-memory store, dropped at the end of each test.
#[fixture]
pub async fn service() -> TutorialService {
    TutorialService::in_memory().await.unwrap()
}

/// Published pytest tutorial field set with the given title.
pub fn pytest_tutorial(title: &str) -> NewTutorial {
    NewTutorial::new(
        title,
        PYTEST_DJANGO_DOCS,
        "Tutorial on how to apply pytest to a Django application",
    )
    .published(true)
}

/// Store the "Pytest" tutorial.
pub async fn new_tutorial(svc: &TutorialService) -> Tutorial {
    svc.create_tutorial(&pytest_tutorial("Pytest")).await.unwrap()
}

/// Store the "More-Pytest" tutorial.
pub async fn another_tutorial(svc: &TutorialService) -> Tutorial {
    svc.create_tutorial(&pytest_tutorial("More-Pytest"))
        .await
        .unwrap()
}
