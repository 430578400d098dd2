//! Static portfolio data.

use std::collections::HashMap;

use crate::core::model::{
    Category, Coordinates, Organisation, OrganisationRole, OrganisationStatus, Project,
    ProjectDetails, Status,
};
use crate::error::{Error, Result};

/// The working set of projects and organisations, indexed by project id.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    organisations: Vec<Organisation>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range progress.
    pub fn new(projects: Vec<Project>, organisations: Vec<Organisation>) -> Result<Self> {
        let mut index = HashMap::with_capacity(projects.len());
        for (position, project) in projects.iter().enumerate() {
            if project.progress > 100 {
                return Err(Error::InvalidProgress {
                    id: project.id.clone(),
                    progress: project.progress,
                });
            }
            if index.insert(project.id.clone(), position).is_some() {
                return Err(Error::DuplicateId(project.id.clone()));
            }
        }
        Ok(Self {
            projects,
            organisations,
            index,
        })
    }

    pub fn sample() -> Self {
        Self::new(sample_projects(), sample_organisations())
            .expect("sample catalog has unique ids and progress within 0-100")
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn organisations(&self) -> &[Organisation] {
        &self.organisations
    }

    pub fn project(&self, id: &str) -> Result<&Project> {
        self.index
            .get(id)
            .map(|&position| &self.projects[position])
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn entry(
    id: &str,
    name: &str,
    (latitude, longitude): (f64, f64),
    status: Status,
    progress: u8,
    category: Category,
    image: &str,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        location: "Singapore".to_string(),
        coordinates: Coordinates::new(latitude, longitude),
        status,
        progress,
        category,
        image: image.to_string(),
        details: ProjectDetails::default(),
    }
}

fn details(
    team: Option<(u32, u32)>,
    companies: &[&str],
    docs: Option<(u32, u32)>,
    (start, end): (&str, &str),
) -> ProjectDetails {
    ProjectDetails {
        description: None,
        users: team.map(|(users, _)| users),
        more_users: team.map(|(_, more)| more),
        companies: companies.iter().map(|c| c.to_string()).collect(),
        total_docs: docs.map(|(total, _)| total),
        pending_docs: docs.map(|(_, pending)| pending),
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
    }
}

fn sample_projects() -> Vec<Project> {
    use Category::*;
    use Status::*;

    let mut projects = vec![
        entry("AMKI", "Ang Mo Kio Infra", (1.3691, 103.8454), Active, 68, Construction, "/project-images/2020_aerial_view_of_punggol_digital_district.jpg"),
        entry("TL4", "Infra at Tuas Link 4", (1.2943, 103.6359), Planning, 45, Design, "/project-images/jtc-space-tuas-hero-2.jpg"),
        entry("LDI", "Loyang Drive (North) Infra", (1.3812, 103.9665), Active, 72, Construction, "/project-images/img_story127_1.jpg"),
        entry("LNS", "Loyang North Substation", (1.3754, 103.9701), Hold, 22, Centex, "/project-images/CPID.png"),
        entry("AS4D", "Aerospace 4 (Design) - Multiple", (1.3521, 103.7234), Active, 35, Design, "/project-images/2020_artist_impression_of_sungei_kadut_central.jpg"),
        entry("BP2C", "Bulim Ph2 Main Infra (Construction)", (1.3423, 103.7101), Active, 58, Construction, "/project-images/bulim-phase-2-hero-1.jpg"),
        entry("BP2D", "Bulim Ph2 Main Infra (Design) - Multiple", (1.3398, 103.7165), Planning, 42, Design, "/project-images/bulim-phase-2-hero-1.jpg"),
        entry("AMK2D", "Space @ AMK2 (Design) - Multiple", (1.3645, 103.8521), Active, 28, Design, "/project-images/Kienta@-Tampines-JTC-NanoSpace-scaled.jpg"),
        entry("KAEC", "Infrastructure at Kolam Ayer Estate (Construction)", (1.3189, 103.8701), Active, 65, Construction, "/project-images/dream_factories_main_banner.jpg"),
        entry("KAED", "Infrastructure at Kolam Ayer Estate (Design) - Multiple", (1.3167, 103.8745), Completed, 51, Design, "/project-images/dream_factories_main_banner.jpg"),
        entry("ARPE", "Ayer Rajah Precinct Enhancements", (1.2967, 103.7865), Active, 83, Centex, "/project-images/jtc-space-tuas-hero-2.jpg"),
        entry("BLS", "Bulim Square", (1.3512, 103.7187), Planning, 47, Construction, "/project-images/de458ead54cd54a724463bbbc1c70c9eefd566155d48225c90832c946b662830.webp"),
        entry("AMGI2A", "Ground Improvement Works at Ayer Merbau Road", (1.3234, 103.7123), Active, 91, Centex, "/project-images/JTC-Timmac.jpg"),
        entry("RRG1BA", "Group 1B R&R (Part A) – MIE", (1.3298, 103.8623), Hold, 76, Design, "/project-images/CPID.png"),
        entry("RRG1BB", "Group 1B R&R (Part B) – EIE, GBIE, GEIE, AIE", (1.3321, 103.8589), Active, 62, Construction, "/project-images/2020_artist_impression_of_sungei_kadut_central.jpg"),
        entry("WSSX", "Wessex R&R", (1.4189, 103.8345), Completed, 54, Design, "/project-images/The-LakeGarden-Residences-Panoramic-View-min.jpeg"),
        entry("G3RRA", "R&R Group 3 Part A", (1.3567, 103.9432), Active, 38, Centex, "/project-images/2020_aerial_view_of_punggol_digital_district.jpg"),
        entry("G3RRB", "R&R Group 3 Part B", (1.3545, 103.9501), Planning, 18, Design, "/project-images/jtc-cleantech-three-cleantech-park-aerial-view-2-1.png"),
        entry("SAP3B2", "SAP3B2 Infra", (1.2876, 103.7234), Active, 71, Construction, "/project-images/img_story127_1.jpg"),
        entry("BGS", "Benoi-Gul Sewer (Construction)", (1.3145, 103.6754), Hold, 85, Construction, "/project-images/dream_factories_main_banner.jpg"),
        entry("BIP1", "Bulim Infra Phase 1 (Construction)", (1.3456, 103.7089), Active, 93, Construction, "/project-images/bulim-phase-2-hero-1.jpg"),
        entry("DLN", "DLN Ramp (Construction)", (1.2765, 103.8234), Planning, 67, Centex, "/project-images/JTC-Timmac.jpg"),
        entry("FABT", "Fascia A&A BIPE TIPA (Construction)", (1.3612, 103.9876), Active, 44, Design, "/project-images/Kienta@-Tampines-JTC-NanoSpace-scaled.jpg"),
        entry("JEG", "JEG (Construction)", (1.4234, 103.7654), Active, 79, Construction, "/project-images/2020_artist_impression_of_sungei_kadut_central.jpg"),
        entry("F1RR", "F1 R&R (Construction)", (1.3087, 103.6912), Completed, 88, Construction, "/project-images/jtc-space-tuas-hero-2.jpg"),
        entry("FPB", "Fascia Package B (Construction)", (1.2987, 103.7876), Active, 56, Centex, "/project-images/de458ead54cd54a724463bbbc1c70c9eefd566155d48225c90832c946b662830.webp"),
        entry("SITC", "SITC FY21-22 (Construction)", (1.3543, 103.7654), Completed, 100, Construction, "/project-images/jtc-cleantech-three-cleantech-park-aerial-view-2-1.png"),
        entry("CTL", "CleanTech Linkway (Construction)", (1.3501, 103.7589), Active, 61, Design, "/project-images/jtc-cleantech-three-cleantech-park-aerial-view-2-1.png"),
        entry("MIP2A", "Merbau Infra Ph2a (Construction)", (1.3201, 103.7198), Planning, 73, Construction, "/project-images/img_story127_1.jpg"),
        entry("PRID1", "Pasir Ris Industrial Drive 1 Cul De Sac (Construction)", (1.3712, 103.9523), Active, 49, Design, "/project-images/CPID.png"),
    ];

    let extended = [
        details(
            Some((5, 7)),
            &["Main Contractor Ltd", "Design Consultants", "Engineering Partners"],
            Some((142, 8)),
            ("Jan 2024", "Dec 2025"),
        ),
        details(
            Some((4, 3)),
            &["Design Consultants", "Engineering Partners"],
            Some((89, 12)),
            ("Mar 2024", "Sep 2025"),
        ),
        details(None, &[], None, ("Jun 2023", "Mar 2025")),
        details(None, &[], None, ("Feb 2024", "Aug 2025")),
    ];
    for (project, extra) in projects.iter_mut().zip(extended) {
        project.details = extra;
    }
    projects
}

fn sample_organisations() -> Vec<Organisation> {
    let org = |id: &str,
               name: &str,
               role: OrganisationRole,
               status: OrganisationStatus,
               (documents_count, team_members, pending_tasks): (u32, u32, u32)| {
        Organisation {
            id: id.to_string(),
            name: name.to_string(),
            role,
            status,
            documents_count,
            team_members,
            pending_tasks,
        }
    };

    vec![
        org(
            "org-mc",
            "BuildTech Construction Pte Ltd",
            OrganisationRole::MainContractor,
            OrganisationStatus::Active,
            (245, 32, 18),
        ),
        org(
            "org-sca",
            "ElectroPower Systems",
            OrganisationRole::SubContractorA,
            OrganisationStatus::Active,
            (89, 12, 7),
        ),
        org(
            "org-scb",
            "HydroFlow Plumbing",
            OrganisationRole::SubContractorB,
            OrganisationStatus::Active,
            (67, 8, 3),
        ),
        org(
            "org-consultant",
            "StructureFirst Engineering",
            OrganisationRole::Consultant,
            OrganisationStatus::Active,
            (156, 15, 11),
        ),
        org(
            "org-architect",
            "ModernSpace Architects",
            OrganisationRole::Architect,
            OrganisationStatus::Completed,
            (203, 18, 5),
        ),
        org(
            "org-manufacturer",
            "SteelCore Industries",
            OrganisationRole::Manufacturer,
            OrganisationStatus::OnHold,
            (134, 24, 9),
        ),
    ]
}
