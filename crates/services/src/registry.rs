use std::collections::HashMap;

use chrono::NaiveDate;
use study_core::model::{
    Assessment, AssessmentDraft, AssessmentError, AssessmentKind, DEFAULT_ROLE, Program,
    ProgramGoals, ProgramType, Student, StudentError, StudentId,
};
use tracing::{debug, info, warn};

use crate::Clock;
use crate::dashboard::DashboardData;
use crate::error::RegistryError;

/// Input for `Registry::create_student`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl NewStudent {
    /// Student with the default role.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: DEFAULT_ROLE.to_owned(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

/// In-memory session: all known students plus the one currently reported on.
///
/// The active student is tracked by id only; the map owns every `Student`.
#[derive(Debug, Default)]
pub struct Registry {
    clock: Clock,
    students: HashMap<StudentId, Student>,
    active: Option<StudentId>,
}

impl Registry {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            students: HashMap::new(),
            active: None,
        }
    }

    /// Register a new student.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateStudent` if the id is taken; the existing
    /// student is left untouched.
    /// Returns `RegistryError::Student` if the id or name is blank.
    pub fn create_student(&mut self, new: NewStudent) -> Result<&Student, RegistryError> {
        let id = StudentId::new(new.id).map_err(|_| StudentError::EmptyId)?;
        if self.students.contains_key(&id) {
            warn!("Refusing to overwrite existing student {}", id);
            return Err(RegistryError::DuplicateStudent(id));
        }

        let student = Student::new(id.clone(), new.name, new.email, new.role, self.clock.now())?;
        info!("Created student {}", id);
        Ok(&*self.students.entry(id).or_insert(student))
    }

    /// Make the student with `id` the active one.
    ///
    /// Returns `false` and keeps the current selection when the id is unknown.
    pub fn set_active(&mut self, id: &str) -> bool {
        let Ok(id) = StudentId::new(id) else {
            return false;
        };
        if !self.students.contains_key(&id) {
            debug!("Unknown student {}; active student unchanged", id);
            return false;
        }
        info!("Active student: {}", id);
        self.active = Some(id);
        true
    }

    #[must_use]
    pub fn active_student_id(&self) -> Option<&StudentId> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn active_student(&self) -> Option<&Student> {
        self.active.as_ref().and_then(|id| self.students.get(id))
    }

    pub fn active_student_mut(&mut self) -> Option<&mut Student> {
        let id = self.active.as_ref()?;
        self.students.get_mut(id)
    }

    #[must_use]
    pub fn active_program(&self) -> Option<&Program> {
        self.active_student().and_then(Student::active_program)
    }

    #[must_use]
    pub fn student(&self, id: &str) -> Option<&Student> {
        let id = StudentId::new(id).ok()?;
        self.students.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Create a program and attach it to the active student.
    ///
    /// Returns `None` when no student is active.
    pub fn create_program(
        &mut self,
        name: impl Into<String>,
        degree: impl Into<String>,
        program_type: ProgramType,
        starts_on: NaiveDate,
        goals: ProgramGoals,
    ) -> Option<&mut Program> {
        let Some(student) = self.active_student_mut() else {
            debug!("No active student; program not created");
            return None;
        };

        let program = Program::new(name, degree, program_type, starts_on, goals);
        info!(
            "Created {} program {:?} for student {}",
            program.program_type(),
            program.name(),
            student.id()
        );
        student.add_program(program);
        student.active_program_mut()
    }

    /// Build an assessment of the given kind.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError` if the draft does not fit the kind or carries an
    /// invalid grade.
    pub fn create_assessment(
        &self,
        kind: AssessmentKind,
        draft: &AssessmentDraft,
    ) -> Result<Assessment, AssessmentError> {
        Assessment::from_draft(kind, draft)
            .inspect(|_| debug!("Created {} assessment", kind))
            .inspect_err(|err| warn!("Rejected {} assessment: {}", kind, err))
    }

    /// Build an assessment from a kind name such as `"Portfolio"`.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownKind` for names outside the fixed set,
    /// otherwise the same errors as [`Registry::create_assessment`].
    pub fn create_assessment_named(
        &self,
        kind: &str,
        draft: &AssessmentDraft,
    ) -> Result<Assessment, AssessmentError> {
        let kind = kind
            .parse::<AssessmentKind>()
            .inspect_err(|err| warn!("{}", err))?;
        self.create_assessment(kind, draft)
    }

    /// Enter, change, or clear a grade in the active program.
    ///
    /// Positions are zero-based indices into terms, modules and assessments.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NoActiveStudent` / `NoActiveProgram` without an active context.
    /// Returns `RegistryError::AssessmentNotFound` if a position is out of range.
    /// Returns `RegistryError::Grade` for values off the scale; the old grade stays.
    pub fn record_grade(
        &mut self,
        term: usize,
        module: usize,
        assessment: usize,
        grade: Option<f64>,
    ) -> Result<(), RegistryError> {
        let program = self
            .active_student_mut()
            .ok_or(RegistryError::NoActiveStudent)?
            .active_program_mut()
            .ok_or(RegistryError::NoActiveProgram)?;
        let target = program
            .term_mut(term)
            .and_then(|t| t.module_mut(module))
            .and_then(|m| m.assessment_mut(assessment))
            .ok_or(RegistryError::AssessmentNotFound {
                term,
                module,
                assessment,
            })?;

        target
            .set_grade(grade)
            .inspect_err(|err| warn!("Grade not recorded: {}", err))?;
        info!(
            "Recorded grade {:?} for term {}, module {}, assessment {}",
            grade, term, module, assessment
        );
        Ok(())
    }

    /// Snapshot of the active student's active program for reporting.
    ///
    /// Returns `None` without an active student or when that student has no program.
    #[must_use]
    pub fn dashboard_data(&self) -> Option<DashboardData> {
        let Some(student) = self.active_student() else {
            debug!("No active student; no dashboard data");
            return None;
        };
        let Some(program) = student.active_program() else {
            debug!("Student {} has no program; no dashboard data", student.id());
            return None;
        };
        Some(DashboardData::capture(student, program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{Module, ModuleStatus, Term};
    use study_core::time::{fixed_clock, fixed_now};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn registry_with_student() -> Registry {
        let mut registry = Registry::new(fixed_clock());
        registry
            .create_student(NewStudent::new("IU1", "Ada", "ada@example.org"))
            .unwrap();
        registry
    }

    fn add_program(registry: &mut Registry) {
        registry
            .create_program(
                "Informatik",
                "Bachelor of Science",
                ProgramType::Bachelor,
                date(2025, 1, 1),
                ProgramGoals::default(),
            )
            .unwrap();
    }

    #[test]
    fn create_student_uses_clock_and_default_role() {
        let registry = registry_with_student();
        let student = registry.student("IU1").unwrap();
        assert_eq!(student.role(), "Student");
        assert_eq!(student.created_at(), fixed_now());
        assert_eq!(registry.len(), 1);
        assert!(registry.active_student().is_none());
    }

    #[test]
    fn create_student_rejects_duplicates() {
        let mut registry = registry_with_student();
        let err = registry
            .create_student(NewStudent::new("IU1", "Someone Else", "x@example.org").with_role("Tutor"))
            .unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateStudent(ref id) if id.as_str() == "IU1"));
        assert_eq!(registry.student("IU1").unwrap().name(), "Ada");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn create_student_keeps_explicit_role() {
        let mut registry = Registry::new(fixed_clock());
        let student = registry
            .create_student(NewStudent::new("T1", "Grace", "grace@example.org").with_role("Tutor"))
            .unwrap();
        assert_eq!(student.role(), "Tutor");
        assert_eq!(registry.student("T1").unwrap().role(), "Tutor");
    }

    #[test]
    fn create_student_rejects_blank_id() {
        let mut registry = Registry::new(fixed_clock());
        let err = registry
            .create_student(NewStudent::new("  ", "Ada", "ada@example.org"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Student(StudentError::EmptyId)));
        assert!(registry.is_empty());
    }

    #[test]
    fn set_active_only_switches_to_known_students() {
        let mut registry = registry_with_student();
        registry
            .create_student(NewStudent::new("IU2", "Grace", "grace@example.org"))
            .unwrap();

        assert!(registry.set_active("IU1"));
        assert!(!registry.set_active("missing"));
        assert_eq!(registry.active_student_id().map(StudentId::as_str), Some("IU1"));

        assert!(registry.set_active("IU2"));
        assert_eq!(registry.active_student().unwrap().name(), "Grace");
    }

    #[test]
    fn create_program_requires_active_student() {
        let mut registry = registry_with_student();
        let program = registry.create_program(
            "Informatik",
            "Bachelor of Science",
            ProgramType::Bachelor,
            date(2025, 1, 1),
            ProgramGoals::default(),
        );
        assert!(program.is_none());
        assert!(registry.student("IU1").unwrap().programs().is_empty());

        registry.set_active("IU1");
        add_program(&mut registry);
        assert_eq!(registry.active_program().unwrap().name(), "Informatik");
    }

    #[test]
    fn create_assessment_dispatches_on_kind() {
        let registry = Registry::new(fixed_clock());
        for kind in AssessmentKind::ALL {
            let assessment = registry
                .create_assessment(kind, &AssessmentDraft::default())
                .unwrap();
            assert_eq!(assessment.kind(), kind);
            assert_eq!(assessment.details(), &kind.default_details());
        }
    }

    #[test]
    fn create_assessment_named_fails_closed() {
        let registry = Registry::new(fixed_clock());
        let err = registry
            .create_assessment_named("Fallstudie", &AssessmentDraft::default())
            .unwrap_err();
        assert_eq!(err, AssessmentError::UnknownKind("Fallstudie".into()));

        let portfolio = registry
            .create_assessment_named("portfolio", &AssessmentDraft::default())
            .unwrap();
        assert_eq!(portfolio.kind(), AssessmentKind::Portfolio);
    }

    #[test]
    fn record_grade_updates_active_program() {
        let mut registry = registry_with_student();
        assert!(matches!(
            registry.record_grade(0, 0, 0, Some(2.0)),
            Err(RegistryError::NoActiveStudent)
        ));

        registry.set_active("IU1");
        assert!(matches!(
            registry.record_grade(0, 0, 0, Some(2.0)),
            Err(RegistryError::NoActiveProgram)
        ));

        add_program(&mut registry);
        let mut term = Term::new(1, date(2025, 1, 1), date(2025, 6, 30)).unwrap();
        let mut module = Module::new("Projekt", 5, true).unwrap();
        module.add_assessment(Assessment::new(AssessmentKind::Portfolio));
        term.add_module(module);
        registry
            .active_student_mut()
            .and_then(Student::active_program_mut)
            .unwrap()
            .add_term(term);

        assert!(matches!(
            registry.record_grade(0, 1, 0, Some(2.0)),
            Err(RegistryError::AssessmentNotFound { module: 1, .. })
        ));
        assert!(matches!(
            registry.record_grade(0, 0, 0, Some(2.5)),
            Err(RegistryError::Grade(_))
        ));
        assert_eq!(registry.active_program().unwrap().total_earned_credits(), 0);

        registry.record_grade(0, 0, 0, Some(2.0)).unwrap();
        assert_eq!(registry.active_program().unwrap().total_earned_credits(), 5);
    }

    #[test]
    fn record_grade_none_reopens_the_module() {
        let mut registry = registry_with_student();
        registry.set_active("IU1");
        add_program(&mut registry);
        let mut term = Term::new(1, date(2025, 1, 1), date(2025, 6, 30)).unwrap();
        let mut module = Module::new("E-Health", 5, true).unwrap();
        module.add_assessment(
            Assessment::new(AssessmentKind::WrittenExam)
                .apply_grade(Some(2.0))
                .unwrap(),
        );
        term.add_module(module);
        registry
            .active_student_mut()
            .and_then(Student::active_program_mut)
            .unwrap()
            .add_term(term);
        assert_eq!(registry.active_program().unwrap().total_earned_credits(), 5);

        registry.record_grade(0, 0, 0, None).unwrap();

        let program = registry.active_program().unwrap();
        let module = &program.terms()[0].modules()[0];
        assert_eq!(module.status(), ModuleStatus::InProgress);
        assert_eq!(module.earned_credits(), 0);
        assert_eq!(module.assessments()[0].grade(), None);
        assert_eq!(program.total_earned_credits(), 0);
        assert_eq!(program.overall_average_grade(), None);
    }

    #[test]
    fn dashboard_data_needs_active_student_and_program() {
        let mut registry = registry_with_student();
        assert!(registry.dashboard_data().is_none());

        registry.set_active("IU1");
        assert!(registry.dashboard_data().is_none());

        add_program(&mut registry);
        let data = registry.dashboard_data().unwrap();
        assert_eq!(data.student.name, "Ada");
        assert_eq!(data.program.name, "Informatik");
        assert_eq!(data.progress.earned_credits, 0);
    }
}
