pub mod handler;
pub mod models;

#[cfg(test)]
mod tests;

pub use models::*;

type Semester = (&'static str, &'static [&'static str]);
type Year = (u32, &'static [Semester]);
type Branch = (&'static str, &'static [Year]);

/// branch -> year -> semester -> subjects. The first branch is the reference for which semesters exist in a year
static TAXONOMY: &[Branch] = &[
    (
        "CSE",
        &[
            (
                1,
                &[
                    (
                        "SEM 1",
                        &[
                            "Engineering Mathematics-I",
                            "Engineering Physics",
                            "Engineering Chemistry",
                            "Basic Electrical Engineering",
                            "Engineering Graphics",
                        ],
                    ),
                    (
                        "SEM 2",
                        &[
                            "Engineering Mathematics-II",
                            "Basic Electronics",
                            "Programming in C",
                            "Environmental Science",
                            "Engineering Mechanics",
                        ],
                    ),
                ],
            ),
            (
                2,
                &[
                    (
                        "SEM 3",
                        &[
                            "Data Structures",
                            "Digital Logic Design",
                            "Discrete Mathematics",
                            "Object-Oriented Programming",
                            "Computer Organization",
                        ],
                    ),
                    (
                        "SEM 4",
                        &[
                            "Design and Analysis of Algorithms",
                            "Operating Systems",
                            "Database Management Systems",
                            "Computer Networks",
                            "Theory of Computation",
                        ],
                    ),
                ],
            ),
            (
                3,
                &[
                    (
                        "SEM 5",
                        &[
                            "Software Engineering",
                            "Compiler Design",
                            "Web Technologies",
                            "Artificial Intelligence",
                            "Cloud Computing",
                        ],
                    ),
                    (
                        "SEM 6",
                        &[
                            "Machine Learning",
                            "Information Security",
                            "Mobile Computing",
                            "Big Data Analytics",
                            "Internet of Things",
                        ],
                    ),
                ],
            ),
            (
                4,
                &[
                    (
                        "SEM 7",
                        &[
                            "Distributed Systems",
                            "Natural Language Processing",
                            "Image Processing",
                            "Project Management",
                            "Blockchain Technology",
                        ],
                    ),
                    (
                        "SEM 8",
                        &[
                            "Deep Learning",
                            "Quantum Computing",
                            "Data Mining",
                            "Major Project",
                            "Technical Seminar",
                        ],
                    ),
                ],
            ),
        ],
    ),
    (
        "ME",
        &[
            (
                1,
                &[
                    (
                        "SEM 1",
                        &[
                            "Engineering Mathematics-I",
                            "Engineering Physics",
                            "Engineering Chemistry",
                            "Basic Electrical Engineering",
                            "Engineering Graphics",
                        ],
                    ),
                    (
                        "SEM 2",
                        &[
                            "Engineering Mathematics-II",
                            "Materials Science",
                            "Workshop Practice",
                            "Environmental Science",
                            "Engineering Mechanics",
                        ],
                    ),
                ],
            ),
            (
                2,
                &[
                    (
                        "SEM 3",
                        &[
                            "Thermodynamics",
                            "Fluid Mechanics",
                            "Manufacturing Processes",
                            "Strength of Materials",
                            "Machine Drawing",
                        ],
                    ),
                    (
                        "SEM 4",
                        &[
                            "Heat Transfer",
                            "Theory of Machines",
                            "Materials Technology",
                            "Industrial Engineering",
                            "Mechanical Measurements",
                        ],
                    ),
                ],
            ),
            (
                3,
                &[
                    (
                        "SEM 5",
                        &[
                            "Design of Machine Elements",
                            "Production Technology",
                            "Internal Combustion Engines",
                            "CAD/CAM",
                            "Industrial Automation",
                        ],
                    ),
                    (
                        "SEM 6",
                        &[
                            "Refrigeration and Air Conditioning",
                            "Machine Tool Design",
                            "Robotics",
                            "Quality Engineering",
                            "Operations Research",
                        ],
                    ),
                ],
            ),
            (
                4,
                &[
                    (
                        "SEM 7",
                        &[
                            "Power Plant Engineering",
                            "Automobile Engineering",
                            "Product Design",
                            "Project Management",
                            "Industrial Safety",
                        ],
                    ),
                    (
                        "SEM 8",
                        &[
                            "Energy Systems",
                            "Advanced Manufacturing",
                            "Mechatronics",
                            "Major Project",
                            "Technical Seminar",
                        ],
                    ),
                ],
            ),
        ],
    ),
];

/// returns every branch name, in display order
pub fn branches() -> Vec<&'static str> {
    TAXONOMY.iter().map(|(name, _)| *name).collect()
}

/// returns the semester labels valid for `year`. Every branch shares the same semesters,
/// so they are read off of the first branch. Unknown years yield an empty list
pub fn semesters(year: u32) -> Vec<&'static str> {
    TAXONOMY
        .first()
        .and_then(|(_, years)| find_year(years, year))
        .map(|sems| sems.iter().map(|(label, _)| *label).collect())
        .unwrap_or_default()
}

/// returns the subjects for the exact branch/year/semester combination
pub fn subjects(branch: &str, year: u32, semester: &str) -> Result<Vec<&'static str>, TaxonomyError> {
    TAXONOMY
        .iter()
        .find(|(name, _)| *name == branch)
        .and_then(|(_, years)| find_year(years, year))
        .and_then(|sems| sems.iter().find(|(label, _)| *label == semester))
        .map(|(_, subjects)| subjects.to_vec())
        .ok_or(TaxonomyError::NotFound)
}

/// builds the full tree for api consumers
pub fn full_taxonomy() -> Vec<BranchApi> {
    TAXONOMY
        .iter()
        .map(|(branch, years)| BranchApi {
            branch: branch.to_string(),
            years: years
                .iter()
                .map(|(year, sems)| YearApi {
                    year: *year,
                    semesters: sems
                        .iter()
                        .map(|(label, subjects)| SemesterApi {
                            semester: label.to_string(),
                            subjects: subjects.iter().map(|s| s.to_string()).collect(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

fn find_year(years: &'static [Year], year: u32) -> Option<&'static [Semester]> {
    years.iter().find(|(y, _)| *y == year).map(|(_, sems)| *sems)
}
