//! Built-in catalog content. Loaded once when the catalog is constructed.

use crate::models::catalog::{
    CareerRoadmap, CareerStep, CategoryOverview, Course, Lesson, QuestionPaper, Question, Quiz, QuizOption, RoadmapStep,
    Subject, SyllabusEntry, SyllabusKind, Topic,
};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=300";

fn lesson(id: &str, title: &str, duration: &str) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
    }
}

fn outline_topic(title: &str, description: &str) -> Topic {
    Topic {
        id: None,
        title: title.to_string(),
        description: description.to_string(),
        lessons: Vec::new(),
    }
}

fn options(texts: [&str; 4]) -> Vec<QuizOption> {
    ["a", "b", "c", "d"]
        .iter()
        .zip(texts)
        .map(|(id, text)| QuizOption {
            id: id.to_string(),
            text: text.to_string(),
        })
        .collect()
}

fn question(id: &str, text: &str, opts: [&str; 4], correct: &str, explanation: Option<&str>) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options(opts),
        correct_answer: correct.to_string(),
        explanation: explanation.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn outline_subject(
    id: &str,
    title: &str,
    description: &str,
    instructor: &str,
    duration: &str,
    topics: Vec<Topic>,
    rating: f32,
    students: u32,
    category: &str,
) -> Subject {
    Subject {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        level: None,
        instructor: instructor.to_string(),
        duration: duration.to_string(),
        category: Some(category.to_string()),
        rating,
        students,
        topics,
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: u32,
    title: &str,
    description: &str,
    instructor: &str,
    duration: &str,
    students: u32,
    rating: f32,
    category: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        instructor: instructor.to_string(),
        duration: duration.to_string(),
        students,
        rating,
        image: PLACEHOLDER_IMAGE.to_string(),
        category: category.to_string(),
    }
}

pub fn subjects() -> Vec<(String, Vec<Subject>)> {
    let physics = Subject {
        id: "physics-fundamentals".to_string(),
        title: "Physics Fundamentals".to_string(),
        description: "Master the core concepts of Physics with comprehensive lessons covering mechanics, thermodynamics, electricity, magnetism, and modern physics.".to_string(),
        image: "/placeholder.svg?height=300&width=600".to_string(),
        level: Some("Class 11".to_string()),
        instructor: "Dr. Rajesh Kumar".to_string(),
        duration: "48 hours".to_string(),
        category: None,
        rating: 4.8,
        students: 1250,
        topics: vec![
            Topic {
                id: Some("mechanics".to_string()),
                title: "Mechanics".to_string(),
                description: "Study of motion, forces, energy, and momentum".to_string(),
                lessons: vec![
                    lesson("kinematics", "Kinematics", "45 min"),
                    lesson("newtons-laws", "Newton's Laws of Motion", "60 min"),
                    lesson("work-energy", "Work and Energy", "50 min"),
                    lesson("momentum", "Momentum and Collisions", "55 min"),
                ],
            },
            Topic {
                id: Some("thermodynamics".to_string()),
                title: "Thermodynamics".to_string(),
                description: "Study of heat, temperature, and energy transfer".to_string(),
                lessons: vec![
                    lesson("temperature", "Temperature and Heat", "40 min"),
                    lesson("laws-thermodynamics", "Laws of Thermodynamics", "65 min"),
                    lesson("heat-engines", "Heat Engines and Efficiency", "50 min"),
                ],
            },
        ],
    };

    vec![
        (
            "class-11".to_string(),
            vec![
                physics,
                outline_subject(
                    "chemistry-essentials",
                    "Chemistry Essentials",
                    "Comprehensive guide to Class 11 Chemistry",
                    "Dr. Priya Singh",
                    "45 hours",
                    vec![
                        outline_topic("Atomic Structure", "Understanding the atom and its components"),
                        outline_topic("Chemical Bonding", "How atoms combine to form molecules"),
                        outline_topic("States of Matter", "Properties of solids, liquids, and gases"),
                    ],
                    4.7,
                    980,
                    "Science",
                ),
            ],
        ),
        (
            "class-12".to_string(),
            vec![outline_subject(
                "advanced-physics",
                "Advanced Physics",
                "Prepare for board exams and competitive tests",
                "Dr. Vikram Patel",
                "54 hours",
                vec![
                    outline_topic("Electrostatics", "Study of electric charges at rest"),
                    outline_topic("Current Electricity", "Flow of electric charge"),
                    outline_topic("Magnetism", "Magnetic fields and their effects"),
                ],
                4.9,
                1580,
                "Science",
            )],
        ),
        (
            "graduation".to_string(),
            vec![outline_subject(
                "computer-science-fundamentals",
                "Computer Science Fundamentals",
                "Core CS concepts for undergraduate students",
                "Prof. Arun Mishra",
                "72 hours",
                vec![
                    outline_topic("Data Structures", "Organizing and storing data"),
                    outline_topic("Algorithms", "Problem-solving methods"),
                    outline_topic("Programming Paradigms", "Different approaches to programming"),
                ],
                4.9,
                2150,
                "Engineering",
            )],
        ),
        (
            "masters".to_string(),
            vec![outline_subject(
                "advanced-data-science",
                "Advanced Data Science",
                "Master data analysis, machine learning, and AI",
                "Prof. Rajiv Khanna",
                "80 hours",
                vec![
                    outline_topic("Machine Learning", "Algorithms that learn from data"),
                    outline_topic("Deep Learning", "Neural networks and their applications"),
                    outline_topic("Big Data Analytics", "Processing and analyzing large datasets"),
                ],
                4.9,
                1450,
                "Technology",
            )],
        ),
    ]
}

pub fn courses() -> Vec<(String, Vec<Course>)> {
    vec![
        (
            "class-11".to_string(),
            vec![
                course(1, "Physics Fundamentals", "Master the core concepts of Physics for Class 11", "Dr. Rajesh Kumar", "48 hours", 1250, 4.8, "Science"),
                course(2, "Chemistry Essentials", "Comprehensive guide to Class 11 Chemistry", "Dr. Priya Singh", "45 hours", 980, 4.7, "Science"),
                course(3, "Mathematics Mastery", "Build a strong foundation in Class 11 Mathematics", "Prof. Amit Sharma", "52 hours", 1450, 4.9, "Science"),
                course(4, "English Literature", "Explore the world of literature and improve language skills", "Ms. Sarah Johnson", "36 hours", 820, 4.6, "Humanities"),
            ],
        ),
        (
            "class-12".to_string(),
            vec![
                course(5, "Advanced Physics", "Prepare for board exams and competitive tests", "Dr. Vikram Patel", "54 hours", 1580, 4.9, "Science"),
                course(6, "Organic Chemistry", "Master organic chemistry concepts for Class 12", "Dr. Meera Gupta", "48 hours", 1320, 4.8, "Science"),
                course(7, "Calculus & Algebra", "Advanced mathematics for Class 12 students", "Prof. Rahul Verma", "56 hours", 1680, 4.9, "Science"),
                course(8, "Economics Fundamentals", "Understand micro and macroeconomics concepts", "Dr. Neha Kapoor", "42 hours", 950, 4.7, "Commerce"),
            ],
        ),
        (
            "graduation".to_string(),
            vec![
                course(9, "Computer Science Fundamentals", "Core CS concepts for undergraduate students", "Prof. Arun Mishra", "72 hours", 2150, 4.9, "Engineering"),
                course(10, "Business Management", "Essential management principles for commerce students", "Dr. Sanjay Gupta", "64 hours", 1850, 4.8, "Commerce"),
                course(11, "Digital Marketing", "Modern marketing strategies for the digital age", "Ms. Ritu Sharma", "58 hours", 2250, 4.9, "Commerce"),
                course(12, "Psychology 101", "Introduction to human behavior and mental processes", "Dr. Ananya Das", "60 hours", 1750, 4.7, "Arts"),
            ],
        ),
        (
            "masters".to_string(),
            vec![
                course(13, "Advanced Data Science", "Master data analysis, machine learning, and AI", "Prof. Rajiv Khanna", "80 hours", 1450, 4.9, "Technology"),
                course(14, "Financial Management", "Advanced financial strategies for business growth", "Dr. Vivek Joshi", "72 hours", 1250, 4.8, "Business"),
                course(15, "Clinical Psychology", "Advanced psychological assessment and therapy techniques", "Dr. Priya Mehta", "76 hours", 980, 4.7, "Medical"),
                course(16, "Artificial Intelligence", "Cutting-edge AI techniques and applications", "Prof. Sunil Kumar", "84 hours", 1680, 4.9, "Technology"),
            ],
        ),
    ]
}

pub fn quizzes() -> Vec<(String, Vec<Quiz>)> {
    let mechanics = Quiz {
        id: "quiz-mechanics".to_string(),
        title: "Mechanics Quiz".to_string(),
        subject: "Physics Fundamentals".to_string(),
        subject_id: "physics-fundamentals".to_string(),
        description: "Test your knowledge of mechanics concepts including kinematics, forces, energy, and momentum.".to_string(),
        time_limit: 30,
        passing_score: 70,
        questions: vec![
            question(
                "q1",
                "Which of Newton's laws states that an object at rest stays at rest, and an object in motion stays in motion unless acted upon by an external force?",
                ["First Law (Law of Inertia)", "Second Law (F = ma)", "Third Law (Action-Reaction)", "Law of Conservation of Momentum"],
                "a",
                Some("Newton's First Law, also known as the Law of Inertia, states that an object will remain at rest or in uniform motion in a straight line unless acted upon by an external force."),
            ),
            question(
                "q2",
                "What is the formula for kinetic energy?",
                ["KE = mgh", "KE = 1/2 mv²", "KE = Fd", "KE = mv"],
                "b",
                Some("Kinetic energy is the energy possessed by an object due to its motion. The formula is KE = 1/2 mv², where m is mass and v is velocity."),
            ),
            question(
                "q3",
                "Which of the following is a vector quantity?",
                ["Mass", "Time", "Displacement", "Energy"],
                "c",
                Some("Displacement is a vector quantity because it has both magnitude and direction. Mass, time, and energy are scalar quantities that have only magnitude."),
            ),
            question(
                "q4",
                "What happens to the gravitational force between two objects when the distance between them is doubled?",
                ["It doubles", "It halves", "It becomes one-fourth", "It remains the same"],
                "c",
                Some("According to Newton's Law of Universal Gravitation, the gravitational force is inversely proportional to the square of the distance. When the distance doubles, the force becomes (1/2)² = 1/4 of the original force."),
            ),
            question(
                "q5",
                "Which principle states that the total momentum of an isolated system remains constant?",
                ["Conservation of Energy", "Conservation of Momentum", "Conservation of Mass", "Conservation of Angular Momentum"],
                "b",
                Some("The Law of Conservation of Momentum states that in an isolated system (no external forces), the total momentum remains constant. This is a fundamental principle in mechanics."),
            ),
        ],
    };

    let thermodynamics = Quiz {
        id: "quiz-thermodynamics".to_string(),
        title: "Thermodynamics Quiz".to_string(),
        subject: "Physics Fundamentals".to_string(),
        subject_id: "physics-fundamentals".to_string(),
        description: "Test your understanding of thermodynamics principles and applications.".to_string(),
        time_limit: 25,
        passing_score: 70,
        questions: vec![question(
            "q1",
            "What is the First Law of Thermodynamics?",
            ["Energy cannot be created or destroyed", "Entropy of an isolated system always increases", "Heat flows from hot to cold bodies", "It is impossible to reach absolute zero"],
            "a",
            None,
        )],
    };

    let periodic_table = Quiz {
        id: "quiz-periodic-table".to_string(),
        title: "Periodic Table Quiz".to_string(),
        subject: "Chemistry Essentials".to_string(),
        subject_id: "chemistry-essentials".to_string(),
        description: "Test your knowledge of the periodic table and element properties.".to_string(),
        time_limit: 20,
        passing_score: 75,
        questions: vec![question(
            "q1",
            "Which element has the highest electronegativity?",
            ["Oxygen", "Chlorine", "Fluorine", "Nitrogen"],
            "c",
            None,
        )],
    };

    let calculus = Quiz {
        id: "quiz-calculus".to_string(),
        title: "Calculus Basics".to_string(),
        subject: "Mathematics Mastery".to_string(),
        subject_id: "mathematics-mastery".to_string(),
        description: "Test your understanding of basic calculus concepts.".to_string(),
        time_limit: 30,
        passing_score: 70,
        questions: vec![question(
            "q1",
            "What is the derivative of sin(x)?",
            ["cos(x)", "-sin(x)", "tan(x)", "-cos(x)"],
            "a",
            None,
        )],
    };

    vec![
        ("physics".to_string(), vec![mechanics, thermodynamics]),
        ("chemistry".to_string(), vec![periodic_table]),
        ("mathematics".to_string(), vec![calculus]),
    ]
}

fn chapters(name: &str, chapters: u32, resources: u32) -> SyllabusEntry {
    SyllabusEntry::new(
        name,
        SyllabusKind::Chapters {
            chapters,
            resources,
        },
    )
}

fn branches(name: &str, branches: u32, courses: u32) -> SyllabusEntry {
    SyllabusEntry::new(name, SyllabusKind::Branches { branches, courses })
}

fn specializations(name: &str, specializations: u32, courses: u32) -> SyllabusEntry {
    SyllabusEntry::new(
        name,
        SyllabusKind::Specializations {
            specializations,
            courses,
        },
    )
}

fn roadmap(steps: [(&str, &str); 4]) -> Vec<RoadmapStep> {
    steps
        .iter()
        .map(|(title, description)| RoadmapStep {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub fn categories() -> Vec<CategoryOverview> {
    vec![
        CategoryOverview {
            key: "class-11".to_string(),
            title: "Class 11th".to_string(),
            description: "Foundation for higher education with subject specializations".to_string(),
            subjects: vec![
                chapters("Physics", 15, 42),
                chapters("Chemistry", 14, 38),
                chapters("Mathematics", 16, 45),
                chapters("Biology", 22, 50),
                chapters("English", 12, 30),
                chapters("Computer Science", 10, 25),
            ],
            roadmap: roadmap([
                ("First Term", "Focus on building fundamentals and core concepts"),
                ("Second Term", "Strengthen understanding and prepare for Class 12th"),
                ("Career Exploration", "Explore potential career paths and interests"),
                ("Entrance Exam Preparation", "Begin preparation for competitive exams"),
            ]),
        },
        CategoryOverview {
            key: "class-12".to_string(),
            title: "Class 12th".to_string(),
            description: "Prepare for board exams and college entrance tests".to_string(),
            subjects: vec![
                chapters("Physics", 15, 48),
                chapters("Chemistry", 16, 45),
                chapters("Mathematics", 13, 40),
                chapters("Biology", 16, 42),
                chapters("English", 10, 25),
                chapters("Computer Science", 12, 30),
            ],
            roadmap: roadmap([
                ("Board Exam Preparation", "Focused preparation for board examinations"),
                ("Entrance Exam Preparation", "Intensive preparation for competitive exams"),
                ("College Applications", "Research and apply to colleges and universities"),
                ("Career Decision", "Finalize career path and required qualifications"),
            ]),
        },
        CategoryOverview {
            key: "graduation".to_string(),
            title: "Graduation".to_string(),
            description: "Undergraduate programs across various disciplines".to_string(),
            subjects: vec![
                branches("Engineering", 8, 120),
                branches("Medicine", 5, 80),
                branches("Commerce", 6, 90),
                branches("Arts & Humanities", 12, 150),
                branches("Science", 10, 130),
                branches("Law", 4, 60),
            ],
            roadmap: roadmap([
                ("First Year", "Foundation courses and general education requirements"),
                ("Second Year", "Specialization begins with focused coursework"),
                ("Third Year", "Advanced courses and potential internships"),
                ("Final Year", "Capstone projects and career preparation"),
            ]),
        },
        CategoryOverview {
            key: "masters".to_string(),
            title: "Master's".to_string(),
            description: "Specialized advanced degrees and research opportunities".to_string(),
            subjects: vec![
                specializations("Engineering", 15, 60),
                specializations("Medicine", 20, 70),
                specializations("Business", 12, 50),
                specializations("Arts & Humanities", 25, 80),
                specializations("Science", 18, 65),
                specializations("Law", 10, 45),
            ],
            roadmap: roadmap([
                ("Coursework", "Advanced specialized courses in chosen field"),
                ("Research", "Conduct original research or applied projects"),
                ("Thesis/Dissertation", "Complete and defend thesis or capstone project"),
                ("Career Advancement", "Leverage advanced degree for career growth"),
            ]),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn paper(
    id: u32,
    title: &str,
    category: &str,
    subject: &str,
    paper_type: &str,
    questions: u32,
    marks: u32,
    duration: &str,
) -> QuestionPaper {
    QuestionPaper {
        id,
        title: title.to_string(),
        category: category.to_string(),
        subject: subject.to_string(),
        year: "2023".to_string(),
        paper_type: paper_type.to_string(),
        download_url: "#".to_string(),
        questions,
        marks,
        duration: duration.to_string(),
    }
}

pub fn question_papers() -> Vec<QuestionPaper> {
    vec![
        paper(1, "CBSE Class 12 Physics 2023", "class-12", "Physics", "Board Exam", 35, 70, "3 hours"),
        paper(2, "CBSE Class 12 Chemistry 2023", "class-12", "Chemistry", "Board Exam", 33, 70, "3 hours"),
        paper(3, "CBSE Class 12 Mathematics 2023", "class-12", "Mathematics", "Board Exam", 38, 80, "3 hours"),
        paper(4, "CBSE Class 11 Physics 2023", "class-11", "Physics", "Board Exam", 30, 70, "3 hours"),
        paper(5, "JEE Main 2023 Paper 1", "graduation", "PCM", "Entrance Exam", 90, 300, "3 hours"),
        paper(6, "NEET 2023", "graduation", "PCB", "Entrance Exam", 180, 720, "3 hours 20 minutes"),
        paper(7, "GATE CSE 2023", "masters", "Computer Science", "Entrance Exam", 65, 100, "3 hours"),
        paper(8, "CAT 2023", "masters", "MBA", "Entrance Exam", 66, 198, "2 hours"),
    ]
}

fn career_step(id: &str, title: &str, description: &str, tasks: [&str; 4]) -> CareerStep {
    CareerStep {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    }
}

fn career_roadmap(key: &str, title: &str, steps: Vec<CareerStep>) -> CareerRoadmap {
    CareerRoadmap {
        key: key.to_string(),
        title: title.to_string(),
        steps,
    }
}

/// Career paths in tab order; the first one is the default.
pub fn career_roadmaps() -> Vec<CareerRoadmap> {
    vec![
        career_roadmap(
            "engineering",
            "Engineering",
            vec![
                career_step(
                    "step1",
                    "Foundation (Class 11-12)",
                    "Build strong fundamentals in Physics, Chemistry, and Mathematics",
                    [
                        "Master NCERT textbooks for PCM",
                        "Practice numerical problems regularly",
                        "Prepare for JEE Main/Advanced or other engineering entrance exams",
                        "Develop analytical and problem-solving skills",
                    ],
                ),
                career_step(
                    "step2",
                    "Undergraduate Degree (B.Tech/B.E.)",
                    "Pursue a bachelor's degree in your chosen engineering discipline",
                    [
                        "Focus on core engineering subjects",
                        "Participate in technical projects and competitions",
                        "Complete internships to gain practical experience",
                        "Develop programming and technical skills",
                    ],
                ),
                career_step(
                    "step3",
                    "Specialization",
                    "Gain expertise in a specific domain within your field",
                    [
                        "Take elective courses in your area of interest",
                        "Work on specialized projects",
                        "Obtain relevant certifications",
                        "Network with professionals in your chosen specialization",
                    ],
                ),
                career_step(
                    "step4",
                    "Career Path",
                    "Choose between industry roles, research, or entrepreneurship",
                    [
                        "Apply for entry-level engineering positions",
                        "Consider higher education (M.Tech/MS/PhD) for research roles",
                        "Explore startup opportunities",
                        "Continue learning through professional development courses",
                    ],
                ),
            ],
        ),
        career_roadmap(
            "medical",
            "Medical",
            vec![
                career_step(
                    "step1",
                    "Foundation (Class 11-12)",
                    "Build strong fundamentals in Biology, Physics, and Chemistry",
                    [
                        "Master NCERT textbooks for Biology, Physics, and Chemistry",
                        "Prepare for NEET or other medical entrance exams",
                        "Develop strong conceptual understanding of human anatomy and physiology",
                        "Practice previous years' question papers",
                    ],
                ),
                career_step(
                    "step2",
                    "MBBS (Bachelor of Medicine and Surgery)",
                    "Complete your medical degree from a recognized institution",
                    [
                        "Focus on medical subjects and clinical rotations",
                        "Prepare for university exams and assessments",
                        "Participate in medical camps and community health programs",
                        "Develop patient interaction and diagnostic skills",
                    ],
                ),
                career_step(
                    "step3",
                    "Internship and Licensing",
                    "Complete mandatory internship and obtain medical license",
                    [
                        "Complete one-year compulsory rotating internship",
                        "Prepare for and clear licensing exams (e.g., NEXT in India)",
                        "Gain hands-on experience in different medical departments",
                        "Decide on specialization path",
                    ],
                ),
                career_step(
                    "step4",
                    "Specialization and Career",
                    "Pursue post-graduate studies or start medical practice",
                    [
                        "Prepare for PG entrance exams (NEET PG)",
                        "Complete MD/MS in chosen specialization",
                        "Consider super-specialization (DM/MCh) for further expertise",
                        "Choose between clinical practice, research, or academic medicine",
                    ],
                ),
            ],
        ),
        career_roadmap(
            "commerce",
            "Commerce",
            vec![
                career_step(
                    "step1",
                    "Foundation (Class 11-12)",
                    "Build strong fundamentals in Commerce, Economics, and Mathematics",
                    [
                        "Master concepts in Accountancy, Business Studies, and Economics",
                        "Develop quantitative aptitude and mathematical skills",
                        "Prepare for commerce-related entrance exams",
                        "Understand basic financial and business principles",
                    ],
                ),
                career_step(
                    "step2",
                    "Undergraduate Degree",
                    "Pursue B.Com, BBA, or related commerce degree",
                    [
                        "Focus on core commerce and business subjects",
                        "Develop analytical and problem-solving skills",
                        "Complete internships in relevant industries",
                        "Participate in business competitions and case studies",
                    ],
                ),
                career_step(
                    "step3",
                    "Professional Qualification/PG",
                    "Obtain professional certification or pursue post-graduation",
                    [
                        "Prepare for CA, CS, CMA, or other professional certifications",
                        "Consider MBA or M.Com for advanced knowledge",
                        "Develop specialized skills in finance, marketing, or HR",
                        "Build professional network through associations and events",
                    ],
                ),
                career_step(
                    "step4",
                    "Career Path",
                    "Choose between corporate roles, entrepreneurship, or consulting",
                    [
                        "Apply for entry-level positions in your chosen field",
                        "Consider specialization in investment banking, consulting, etc.",
                        "Explore entrepreneurship opportunities",
                        "Continue professional development through advanced certifications",
                    ],
                ),
            ],
        ),
        career_roadmap(
            "arts",
            "Arts & Humanities",
            vec![
                career_step(
                    "step1",
                    "Foundation (Class 11-12)",
                    "Build strong fundamentals in Humanities subjects",
                    [
                        "Focus on subjects like History, Political Science, Sociology, Psychology, etc.",
                        "Develop strong reading, writing, and critical thinking skills",
                        "Explore areas of interest within humanities",
                        "Prepare for entrance exams for top liberal arts colleges",
                    ],
                ),
                career_step(
                    "step2",
                    "Undergraduate Degree",
                    "Pursue BA in chosen humanities discipline",
                    [
                        "Focus on core subjects in your chosen discipline",
                        "Develop research and analytical skills",
                        "Participate in debates, seminars, and cultural activities",
                        "Complete internships in relevant fields",
                    ],
                ),
                career_step(
                    "step3",
                    "Specialization/PG",
                    "Pursue post-graduation or specialized courses",
                    [
                        "Complete MA/MSc in your chosen field",
                        "Consider interdisciplinary programs",
                        "Develop research methodology skills",
                        "Build academic or professional network",
                    ],
                ),
                career_step(
                    "step4",
                    "Career Path",
                    "Choose between academia, civil services, media, or other fields",
                    [
                        "Prepare for civil services, journalism, or other competitive exams",
                        "Consider PhD for academic and research careers",
                        "Explore opportunities in media, content creation, or publishing",
                        "Develop specialized skills relevant to your chosen career path",
                    ],
                ),
            ],
        ),
    ]
}
