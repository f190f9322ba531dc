use std::rc::Rc;

use log::debug;
use thiserror::Error;

use super::preview::{Preview, PreviewError, PreviewSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
}

pub static WALKER_QUESTIONS: [WizardQuestion; 3] = [
    WizardQuestion { id: "q1", prompt: "Take a photo of the event entrance sign." },
    WizardQuestion { id: "q2", prompt: "Take a photo with your group in front of the fire pit." },
    WizardQuestion { id: "q3", prompt: "Take a photo of your favorite moment tonight." },
];

pub fn find_question(id: &str) -> Option<&'static WizardQuestion> {
    WALKER_QUESTIONS.iter().find(|q| q.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Index into [`WALKER_QUESTIONS`].
    Question(usize),
    Done,
}

impl Step {
    fn next(self) -> Step {
        match self {
            Step::Question(i) if i + 1 < WALKER_QUESTIONS.len() => Step::Question(i + 1),
            _ => Step::Done,
        }
    }

    /// Number of completed questions.
    pub fn index(self) -> usize {
        match self {
            Step::Question(i) => i,
            Step::Done => WALKER_QUESTIONS.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please upload a photo to continue.")]
    MissingPhoto,
    #[error(transparent)]
    Preview(#[from] PreviewError),
}

pub struct WizardAnswer<S: PreviewSource> {
    pub question_id: &'static str,
    pub photo: S::Photo,
    preview: Preview<S>,
}

impl<S: PreviewSource> WizardAnswer<S> {
    pub fn preview_url(&self) -> &str {
        self.preview.url()
    }

    /// Falls back to the raw id in case the question list changed underneath.
    pub fn prompt(&self) -> &'static str {
        find_question(self.question_id)
            .map(|q| q.prompt)
            .unwrap_or(self.question_id)
    }
}

struct Selection<S: PreviewSource> {
    photo: S::Photo,
    preview: Preview<S>,
}

/// Walker photo wizard: one required photo per question, strictly in order,
/// no skipping and no going back.
pub struct Wizard<S: PreviewSource> {
    source: Rc<S>,
    step: Step,
    answers: Vec<WizardAnswer<S>>,
    selection: Option<Selection<S>>,
    error: Option<WizardError>,
}

impl<S: PreviewSource> Wizard<S> {
    pub fn new(source: Rc<S>) -> Self {
        Self {
            source,
            step: Step::Question(0),
            answers: Vec::new(),
            selection: None,
            error: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step == Step::Done
    }

    pub fn current_question(&self) -> Option<&'static WizardQuestion> {
        match self.step {
            Step::Question(i) => WALKER_QUESTIONS.get(i),
            Step::Done => None,
        }
    }

    pub fn answers(&self) -> &[WizardAnswer<S>] {
        &self.answers
    }

    pub fn selected_preview(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.preview.url())
    }

    pub fn error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    pub fn progress_text(&self) -> String {
        let total = WALKER_QUESTIONS.len();
        match self.step {
            Step::Question(i) => format!("Question {} of {}", i + 1, total),
            Step::Done => format!("Completed {}/{}", total, total),
        }
    }

    pub fn progress_percent(&self) -> f64 {
        let pct = self.step.index() as f64 / WALKER_QUESTIONS.len() as f64 * 100.0;
        pct.min(100.0)
    }

    /// Replaces the photo picked for the current question. `None` just drops
    /// the current pick.
    pub fn pick_file(&mut self, photo: Option<S::Photo>) {
        self.error = None;
        // Release the old preview before creating a new one.
        self.selection = None;

        if self.is_done() {
            debug!("Ignoring photo pick after the last question");
            return;
        }

        let Some(photo) = photo else {
            return;
        };

        match Preview::acquire(&self.source, &photo) {
            Ok(preview) => self.selection = Some(Selection { photo, preview }),
            Err(e) => self.error = Some(e.into()),
        }
    }

    pub fn submit_step(&mut self) -> Result<(), WizardError> {
        self.error = None;

        let Some(question) = self.current_question() else {
            return Ok(());
        };

        let Some(Selection { photo, preview }) = self.selection.take() else {
            self.error = Some(WizardError::MissingPhoto);
            return Err(WizardError::MissingPhoto);
        };

        self.answers.push(WizardAnswer {
            question_id: question.id,
            photo,
            preview,
        });
        self.step = self.step.next();
        debug!("Answered {}, now at {:?}", question.id, self.step);
        Ok(())
    }

    pub fn restart(&mut self) {
        self.answers.clear();
        self.selection = None;
        self.step = Step::Question(0);
        self.error = None;
        debug!("Wizard restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt::preview::fake::FakePreviews;

    fn new_wizard() -> (Rc<FakePreviews>, Wizard<FakePreviews>) {
        let source = Rc::new(FakePreviews::default());
        (Rc::clone(&source), Wizard::new(source))
    }

    fn answer_all(wizard: &mut Wizard<FakePreviews>) {
        for n in 0..WALKER_QUESTIONS.len() {
            wizard.pick_file(Some(format!("photo-{}.jpg", n)));
            wizard.submit_step().unwrap();
        }
    }

    #[test]
    fn starts_at_first_question() {
        let (_, wizard) = new_wizard();

        assert_eq!(wizard.step(), Step::Question(0));
        assert_eq!(wizard.current_question().map(|q| q.id), Some("q1"));
        assert!(wizard.answers().is_empty());
        assert_eq!(wizard.selected_preview(), None);
        assert_eq!(wizard.progress_text(), "Question 1 of 3");
        assert_eq!(wizard.progress_percent(), 0.0);
    }

    #[test]
    fn submit_without_photo_stays_put() {
        let (_, mut wizard) = new_wizard();

        assert_eq!(wizard.submit_step(), Err(WizardError::MissingPhoto));
        assert_eq!(wizard.step(), Step::Question(0));
        assert_eq!(
            wizard.error().map(|e| e.to_string()).as_deref(),
            Some("Please upload a photo to continue.")
        );
    }

    #[test]
    fn picking_a_photo_clears_the_error() {
        let (_, mut wizard) = new_wizard();
        let _ = wizard.submit_step();

        wizard.pick_file(Some("entrance.jpg".to_string()));
        assert!(wizard.error().is_none());
        assert_eq!(wizard.selected_preview(), Some("blob:fake/0"));
    }

    #[test]
    fn repicking_releases_the_previous_preview() {
        let (source, mut wizard) = new_wizard();

        wizard.pick_file(Some("a.jpg".to_string()));
        wizard.pick_file(Some("b.jpg".to_string()));

        assert_eq!(source.released(), vec!["blob:fake/0".to_string()]);
        assert_eq!(wizard.selected_preview(), Some("blob:fake/1"));
        assert_eq!(wizard.step(), Step::Question(0));
    }

    #[test]
    fn removing_the_photo_releases_it() {
        let (source, mut wizard) = new_wizard();

        wizard.pick_file(Some("a.jpg".to_string()));
        wizard.pick_file(None);

        assert_eq!(wizard.selected_preview(), None);
        assert_eq!(source.live(), 0);
        assert_eq!(wizard.submit_step(), Err(WizardError::MissingPhoto));
    }

    #[test]
    fn three_answers_reach_done_in_order() {
        let (source, mut wizard) = new_wizard();
        answer_all(&mut wizard);

        assert!(wizard.is_done());
        assert_eq!(wizard.current_question(), None);
        let ids: Vec<_> = wizard.answers().iter().map(|a| a.question_id).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
        assert_eq!(wizard.answers()[1].photo, "photo-1.jpg");
        assert_eq!(wizard.answers()[2].prompt(), "Take a photo of your favorite moment tonight.");
        assert_eq!(wizard.progress_text(), "Completed 3/3");
        assert_eq!(wizard.progress_percent(), 100.0);
        // Answers keep their previews alive for the review screen.
        assert_eq!(source.live(), 3);
    }

    #[test]
    fn submitting_clears_the_selection() {
        let (_, mut wizard) = new_wizard();

        wizard.pick_file(Some("a.jpg".to_string()));
        wizard.submit_step().unwrap();

        assert_eq!(wizard.step(), Step::Question(1));
        assert_eq!(wizard.selected_preview(), None);
        assert_eq!(wizard.answers()[0].preview_url(), "blob:fake/0");
        assert_eq!(wizard.submit_step(), Err(WizardError::MissingPhoto));
    }

    #[test]
    fn submit_after_done_is_a_no_op() {
        let (_, mut wizard) = new_wizard();
        answer_all(&mut wizard);

        assert_eq!(wizard.submit_step(), Ok(()));
        wizard.pick_file(Some("extra.jpg".to_string()));
        assert_eq!(wizard.answers().len(), 3);
        assert_eq!(wizard.selected_preview(), None);
    }

    #[test]
    fn restart_from_done_releases_everything() {
        let (source, mut wizard) = new_wizard();
        answer_all(&mut wizard);

        wizard.restart();

        assert_eq!(wizard.step(), Step::Question(0));
        assert!(wizard.answers().is_empty());
        assert!(wizard.error().is_none());
        assert_eq!(source.live(), 0);
        assert_eq!(source.released().len(), 3);
    }

    #[test]
    fn restart_mid_way_releases_in_flight_pick() {
        let (source, mut wizard) = new_wizard();
        wizard.pick_file(Some("a.jpg".to_string()));
        wizard.submit_step().unwrap();
        wizard.pick_file(Some("b.jpg".to_string()));
        wizard.submit_step().unwrap();
        wizard.pick_file(Some("c.jpg".to_string()));

        wizard.restart();
        assert_eq!(source.live(), 0);
        assert_eq!(source.created().len(), 3);
    }

    #[test]
    fn dropping_the_wizard_releases_previews() {
        let (source, mut wizard) = new_wizard();
        wizard.pick_file(Some("a.jpg".to_string()));
        wizard.submit_step().unwrap();
        wizard.pick_file(Some("b.jpg".to_string()));

        drop(wizard);
        assert_eq!(source.live(), 0);
    }

    #[test]
    fn preview_failure_is_reported() {
        let (source, mut wizard) = new_wizard();
        source.fail.set(true);

        wizard.pick_file(Some("weird.raw".to_string()));
        assert!(matches!(wizard.error(), Some(WizardError::Preview(_))));
        assert_eq!(wizard.selected_preview(), None);
        assert_eq!(wizard.step(), Step::Question(0));
    }
}
