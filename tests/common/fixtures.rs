use siteboard::core::{
    Category, Coordinates, Point, Project, ProjectDetails, ScreenProjection, Status,
};

/// Creates a project in Singapore with 50% progress and no extended details.
pub fn make_project(id: &str, name: &str, status: Status, category: Category) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        location: "Singapore".to_string(),
        coordinates: Coordinates::new(1.35, 103.8),
        status,
        progress: 50,
        category,
        image: format!("/project-images/{}.jpg", id.to_lowercase()),
        details: ProjectDetails::default(),
    }
}

/// Three records with statuses [Active, Hold, Active] and categories [Design, Construction, Design].
pub fn three_projects() -> Vec<Project> {
    vec![
        make_project("P1", "Harbour Front Depot", Status::Active, Category::Design),
        make_project("P2", "Jurong Pier Works", Status::Hold, Category::Construction),
        make_project("P3", "Changi Link Road", Status::Active, Category::Design),
    ]
}

pub fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.id.clone()).collect()
}

/// Projection that puts every coordinate at the same screen point.
pub struct FixedProjection {
    pub point: Point,
    pub size: Option<(f64, f64)>,
}

impl ScreenProjection for FixedProjection {
    fn project_to_screen(&self, _coordinates: Coordinates) -> Option<Point> {
        self.size.map(|_| self.point)
    }

    fn viewport_size(&self) -> Option<(f64, f64)> {
        self.size
    }
}

pub const VIEWPORT: (f64, f64) = (800.0, 600.0);

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
