//! Portfolio content records.
//!
//! The host page embeds the resume and project data as JSON; the particle
//! scene only reads the owner's name from it, the terminal panel renders the
//! rest.

use serde::Deserialize;

/// How to reach the owner.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ContactInfo {
	/// Phone number.
	pub phone: String,
	/// Email address.
	pub email: String,
	/// LinkedIn handle or URL.
	pub linkedin: String,
}

/// A degree or programme.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Education {
	/// Degree name.
	pub degree: String,
	/// School.
	pub institution: String,
	/// Specialisation or notes.
	pub details: String,
	/// Free-form date range.
	pub period: String,
	/// Grade average as written.
	pub gpa: String,
}

/// An internship or job, with bullet points.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
	/// Position held.
	pub role: String,
	/// Employer.
	pub company: String,
	/// Free-form date range.
	pub period: String,
	/// Accomplishment bullets.
	#[serde(default)]
	pub points: Vec<String>,
	/// Tools used, if listed.
	#[serde(default)]
	pub tech_stack: Option<String>,
}

/// Skills by category.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SkillSet {
	/// Spoken languages.
	#[serde(default)]
	pub languages: Vec<String>,
	/// Technical skills.
	#[serde(default)]
	pub technical: Vec<String>,
}

/// Courses taken at one university.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CourseWork {
	/// Where the courses were taken.
	pub university: String,
	/// Course names.
	#[serde(default)]
	pub courses: Vec<String>,
}

/// A volunteering role.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct VolunteerWork {
	/// Position held.
	pub role: String,
	/// Free-form date range.
	pub period: String,
	/// What the role involved.
	#[serde(default)]
	pub description: Option<String>,
}

/// The full resume.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
	/// Owner name; spelled out by the particle title.
	pub name: String,
	/// Contact details.
	pub contact: ContactInfo,
	/// Degrees, newest first.
	pub education: Vec<Education>,
	/// Internships.
	pub internships: Vec<Experience>,
	/// Jobs.
	pub work_experience: Vec<Experience>,
	/// Skills.
	pub skills: SkillSet,
	/// Coursework by university.
	pub courses: Vec<CourseWork>,
	/// Volunteering roles.
	pub volunteering: Vec<VolunteerWork>,
}

/// One stage of a project's architecture write-up.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ArchitectureStage {
	/// Stage name.
	pub stage: String,
	/// What happens in this stage.
	pub details: String,
}

/// A portfolio project and its write-up.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectDetail {
	/// Stable identifier.
	pub id: String,
	/// Project name.
	pub title: String,
	/// One-line tagline.
	pub subtitle: String,
	/// Free-form date.
	pub date: String,
	/// Technologies used.
	pub tech: Vec<String>,
	/// Abstract paragraph.
	#[serde(rename = "abstract")]
	pub summary: String,
	/// Architecture walkthrough.
	pub architecture: Vec<ArchitectureStage>,
	/// Outcome summary.
	pub results: String,
}

/// Everything the page embeds.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Content {
	/// The resume.
	pub resume: ResumeData,
	/// Projects, in display order.
	pub projects: Vec<ProjectDetail>,
}

impl Content {
	/// Parses the embedded JSON document.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// The name to render as particles, if the resume has one.
	pub fn title(&self) -> Option<&str> {
		let name = self.resume.name.trim();
		(!name.is_empty()).then_some(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"{
		"resume": {
			"name": "JIA SONG",
			"contact": { "phone": "+1 555", "email": "a@b.c", "linkedin": "profile" },
			"education": [
				{ "degree": "MSc", "institution": "UdeM", "details": "CS", "period": "2024", "gpa": "4.0" }
			],
			"internships": [
				{ "role": "Intern", "company": "UNODC", "period": "2025", "points": ["built a bot"], "techStack": "Python" }
			],
			"workExperience": [
				{ "role": "Tutor", "company": "SOSprof", "period": "2022", "points": [] }
			],
			"skills": { "languages": ["English"], "technical": ["Python"] },
			"courses": [ { "university": "McGill", "courses": ["AI"] } ],
			"volunteering": [ { "role": "Member", "period": "2019" } ]
		},
		"projects": [
			{
				"id": "unodc-bot",
				"title": "Knowledge Bot",
				"tech": ["n8n"],
				"abstract": "RAG assistant",
				"architecture": [ { "stage": "Phase 1", "details": "ingest" } ],
				"results": "fast"
			}
		]
	}"#;

	#[test]
	fn parses_camel_case_records() {
		let content = Content::from_json(SAMPLE).unwrap();
		assert_eq!(content.title(), Some("JIA SONG"));
		assert_eq!(content.resume.work_experience[0].company, "SOSprof");
		assert_eq!(content.resume.internships[0].tech_stack.as_deref(), Some("Python"));
		assert_eq!(content.resume.volunteering[0].description, None);
		assert_eq!(content.projects[0].summary, "RAG assistant");
		assert_eq!(content.projects[0].architecture[0].stage, "Phase 1");
	}

	#[test]
	fn missing_sections_default() {
		let content = Content::from_json("{}").unwrap();
		assert_eq!(content, Content::default());
		assert_eq!(content.title(), None);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(Content::from_json("{ nope").is_err());
	}
}
