use crate::board::domain::{JobPosting, JobType, PostingId};

struct SeedPosting {
    id: u32,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    job_type: JobType,
    posted: &'static str,
    category: Option<&'static str>,
    description: &'static str,
    requirements: &'static [&'static str],
}

const SEED: [SeedPosting; 7] = [
    SeedPosting {
        id: 1,
        title: "Senior Frontend Developer",
        company: "TechCorp Solutions",
        location: "New York, NY (Remote)",
        salary: "$120,000 - $150,000",
        job_type: JobType::FullTime,
        posted: "2 days ago",
        category: None,
        description: "We're looking for an experienced Frontend Developer with React expertise to join our growing team. You'll be working on our flagship product, collaborating with designers and backend engineers.",
        requirements: &[
            "5+ years of frontend development experience",
            "Strong proficiency with React, Redux, and modern JavaScript",
            "Experience with responsive design and mobile-first approach",
            "Bachelor's degree in Computer Science or related field",
        ],
    },
    SeedPosting {
        id: 2,
        title: "UX/UI Designer",
        company: "Creative Design Studio",
        location: "San Francisco, CA",
        salary: "$90,000 - $120,000",
        job_type: JobType::FullTime,
        posted: "1 week ago",
        category: None,
        description: "Join our creative team to design beautiful, intuitive interfaces for web and mobile applications. Work closely with product managers and developers to create seamless user experiences.",
        requirements: &[
            "3+ years of UX/UI design experience",
            "Proficiency with Figma, Sketch, and Adobe Creative Suite",
            "Portfolio demonstrating strong visual design skills",
            "Experience conducting user research and usability testing",
        ],
    },
    SeedPosting {
        id: 3,
        title: "Product Manager",
        company: "InnovateX",
        location: "Austin, TX (Hybrid)",
        salary: "$110,000 - $140,000",
        job_type: JobType::FullTime,
        posted: "3 days ago",
        category: None,
        description: "Lead product development for our SaaS platform. Define product vision, collaborate with cross-functional teams, and ensure successful product launches and iterations.",
        requirements: &[
            "4+ years of product management experience in tech",
            "Strong analytical and problem-solving skills",
            "Experience with agile methodologies",
            "Excellent communication and stakeholder management",
        ],
    },
    SeedPosting {
        id: 4,
        title: "Senior React Developer",
        company: "TechCorp International",
        location: "San Francisco, CA",
        salary: "$120,000 - $150,000",
        job_type: JobType::FullTime,
        posted: "2 days ago",
        category: Some("Development"),
        description: "We are looking for an experienced React developer to join our team and help build our next-generation web applications.",
        requirements: &["React", "JavaScript", "TypeScript", "Redux", "Node.js"],
    },
    SeedPosting {
        id: 5,
        title: "Product Designer",
        company: "CreativeHub",
        location: "Remote",
        salary: "$90,000 - $110,000",
        job_type: JobType::Contract,
        posted: "1 week ago",
        category: Some("Design"),
        description: "Join our design team to create intuitive and beautiful user experiences for our clients across various industries.",
        requirements: &["UI/UX", "Figma", "Adobe XD", "User Research", "Prototyping"],
    },
    SeedPosting {
        id: 6,
        title: "Marketing Manager",
        company: "GrowthBoost Agency",
        location: "New York, NY",
        salary: "$85,000 - $105,000",
        job_type: JobType::FullTime,
        posted: "3 days ago",
        category: Some("Marketing"),
        description: "Lead our marketing efforts and help develop strategies to increase brand awareness and drive customer acquisition.",
        requirements: &[
            "Digital Marketing",
            "SEO",
            "Content Strategy",
            "Analytics",
            "Social Media",
        ],
    },
    SeedPosting {
        id: 7,
        title: "Data Scientist",
        company: "DataInsights Corp",
        location: "Chicago, IL",
        salary: "$110,000 - $140,000",
        job_type: JobType::FullTime,
        posted: "5 days ago",
        category: Some("Data Science"),
        description: "Analyze complex datasets and develop machine learning models to solve business problems and extract actionable insights.",
        requirements: &[
            "Python",
            "Machine Learning",
            "SQL",
            "Data Visualization",
            "Statistics",
        ],
    },
];

pub(crate) fn sample_postings() -> Vec<JobPosting> {
    SEED.iter()
        .map(|seed| JobPosting {
            id: PostingId(seed.id),
            title: seed.title.to_string(),
            company: seed.company.to_string(),
            location: seed.location.to_string(),
            salary_range: seed.salary.to_string(),
            job_type: seed.job_type,
            posted_label: seed.posted.to_string(),
            description: seed.description.to_string(),
            requirements: seed.requirements.iter().map(|item| item.to_string()).collect(),
            category: seed.category.map(str::to_string),
        })
        .collect()
}
