//! Built-in catalog data: career profiles, the interest and skill taxonomies, and the UN SDG table.

use super::models::{CareerRecord, Sdg, TaxonomyCategory};

pub const BUILTIN_VERSION: &str = "2025.1";

type CareerRow = (
    u32,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static [u8],
);

const CAREERS: &[CareerRow] = &[
    (
        1,
        "Microfinance Specialist",
        "Designs small loans and savings programs to support underserved communities.",
        &["Economics", "Business Studies / Entrepreneurship", "Global Politics / Civics"],
        &["Strategic thinking", "Data analysis", "Helping people", "Understanding cultures"],
        &[1, 8, 10],
    ),
    (
        2,
        "Agroecologist",
        "Applies ecological science to farming for healthier food systems and better soil.",
        &["Biology", "Environmental Systems & Societies / Environmental Science", "Agriculture / Sustainable Farming"],
        &["Working outdoors", "Problem solving", "Supporting the planet", "Working with animals"],
        &[2, 13, 15],
    ),
    (
        3,
        "Biomedical Engineer",
        "Develops medical devices like prosthetics, diagnostic tools, and wearable tech.",
        &["Biology", "Physics", "Engineering (General or Applied)", "Design & Technology / Engineering"],
        &["Problem solving", "Building or fixing", "Using tools/machines", "Helping people"],
        &[3, 9, 10],
    ),
    (
        4,
        "Digital Learning Developer",
        "Creates educational games, apps, and platforms for digital learning.",
        &["Computer Science / Programming", "Education", "Design & Technology / Engineering"],
        &["Coding", "Designing digitally", "Writing or storytelling", "Explaining ideas"],
        &[4, 9, 10],
    ),
    (
        5,
        "Hydrologist",
        "Studies the water cycle and helps improve clean water access and conservation.",
        &["Environmental Systems & Societies / Environmental Science", "Geography", "Chemistry"],
        &["Data analysis", "Working outdoors", "Supporting the planet", "Problem solving"],
        &[6, 13, 14],
    ),
    (
        6,
        "Wind Turbine Technician",
        "Installs and maintains turbines that convert wind into clean electricity.",
        &["Physics", "Engineering (General or Applied)", "Environmental Systems & Societies / Environmental Science"],
        &["Building or fixing", "Working outdoors", "Using tools/machines", "Supporting the planet"],
        &[7, 8, 13],
    ),
    (
        7,
        "Waste Management Engineer",
        "Designs systems for composting, recycling, and waste reduction.",
        &["Environmental Systems & Societies / Environmental Science", "Chemistry", "Engineering (General or Applied)"],
        &["Problem solving", "Strategic thinking", "Supporting the planet", "Building or fixing"],
        &[11, 12, 13],
    ),
    (
        8,
        "Circular Economy Analyst",
        "Redesigns how companies produce and reuse materials to reduce waste.",
        &["Business Studies / Entrepreneurship", "Environmental Systems & Societies / Environmental Science", "Economics"],
        &["Strategic thinking", "Data analysis", "Supporting the planet", "Standing up for causes"],
        &[9, 12, 13],
    ),
    (
        9,
        "Sustainable Fashion Designer",
        "Creates trendy clothing using ethical and eco-friendly materials.",
        &["Visual Arts (drawing, painting, sculpture)", "Graphic Design / Digital Media", "Product Design / Industrial Design"],
        &["Creative thinking", "Drawing or painting", "Supporting the planet", "Designing digitally"],
        &[12, 13, 8],
    ),
    (
        10,
        "Atmospheric Scientist",
        "Studies weather and climate systems to understand and model change.",
        &["Physics", "Geography", "Environmental Systems & Societies / Environmental Science"],
        &["Data analysis", "Strategic thinking", "Supporting the planet", "Problem solving"],
        &[13, 11, 17],
    ),
    (
        11,
        "Carbon Accounting Analyst",
        "Tracks emissions and helps companies reduce their carbon footprint.",
        &["Economics", "Environmental Systems & Societies / Environmental Science", "Business Studies / Entrepreneurship"],
        &["Data analysis", "Strategic thinking", "Supporting the planet", "Decision-making"],
        &[12, 13, 9],
    ),
    (
        12,
        "Marine Biologist",
        "Studies ocean ecosystems and works to protect marine biodiversity.",
        &["Biology", "Environmental Systems & Societies / Environmental Science", "Geography"],
        &["Working outdoors", "Data analysis", "Supporting the planet", "Working with animals"],
        &[14, 13, 15],
    ),
    (
        13,
        "Urban City Planner",
        "Designs greener, more connected cities using sustainable planning.",
        &["Geography", "Architecture / Interior Design", "Environmental Systems & Societies / Environmental Science"],
        &["Strategic thinking", "Designing digitally", "Problem solving", "Supporting the planet"],
        &[11, 9, 13],
    ),
    (
        14,
        "Resilience Engineer",
        "Builds infrastructure that can withstand floods, heatwaves, and climate shocks.",
        &["Engineering (General or Applied)", "Physics", "Environmental Systems & Societies / Environmental Science"],
        &["Problem solving", "Strategic thinking", "Building or fixing", "Decision-making"],
        &[9, 11, 13],
    ),
    (
        15,
        "Disaster Relief Coordinator",
        "Coordinates emergency response during disasters, from logistics to shelter.",
        &["Global Politics / Civics", "Geography", "Business Studies / Entrepreneurship"],
        &["Leading others", "Decision-making", "Helping people", "Resolving conflict"],
        &[3, 11, 16],
    ),
    (
        16,
        "Environmental Data Scientist",
        "Uses data to predict and respond to environmental and climate issues.",
        &["Computer Science / Programming", "Mathematics", "Environmental Systems & Societies / Environmental Science"],
        &["Coding", "Data analysis", "Strategic thinking", "Supporting the planet"],
        &[13, 14, 15],
    ),
    (
        17,
        "Food Systems Analyst",
        "Analyzes global food supply chains and suggests improvements for sustainability.",
        &["Agriculture / Sustainable Farming", "Business Studies / Entrepreneurship", "Geography"],
        &["Data analysis", "Strategic thinking", "Supporting the planet", "Standing up for causes"],
        &[2, 12, 13],
    ),
    (
        18,
        "Space Systems Engineer",
        "Designs satellites and space tech used in communication and climate monitoring.",
        &["Physics", "Engineering (General or Applied)", "Mathematics"],
        &["Problem solving", "Strategic thinking", "Building or fixing", "Decision-making"],
        &[9, 13, 17],
    ),
    (
        19,
        "AI Engineer",
        "Develops intelligent systems that power apps, automation, and innovation.",
        &["Computer Science / Programming", "Mathematics", "Philosophy"],
        &["Coding", "Problem solving", "Strategic thinking", "Data analysis"],
        &[9, 8, 4],
    ),
    (
        20,
        "Doctor",
        "Diagnoses and treats patients, supporting health and well-being.",
        &["Biology", "Chemistry", "Health Science / Pre-Med"],
        &["Decision-making", "Helping people", "Listening well", "Problem solving"],
        &[3, 5, 10],
    ),
    (
        21,
        "Product Manager",
        "Leads product teams from idea to launch across industries.",
        &["Business Studies / Entrepreneurship", "Psychology", "Design & Technology / Engineering"],
        &["Leading others", "Strategic thinking", "Decision-making", "Explaining ideas"],
        &[8, 9, 12],
    ),
    (
        22,
        "Graphic Designer",
        "Creates visual content like logos, posters, and digital assets.",
        &["Visual Arts (drawing, painting, sculpture)", "Graphic Design / Digital Media", "Design & Technology / Engineering"],
        &["Creative thinking", "Drawing or painting", "Designing digitally", "Explaining ideas"],
        &[8, 9, 12],
    ),
    (
        23,
        "Journalist",
        "Reports and writes news stories for TV, social media, or publications.",
        &["English Literature / Language Arts", "Global Politics / Civics", "Psychology"],
        &["Writing or storytelling", "Listening well", "Explaining ideas", "Standing up for causes"],
        &[16, 10, 17],
    ),
    (
        24,
        "Investment Banker",
        "Advises companies on financial deals, growth, and capital strategies.",
        &["Economics", "Business Studies / Entrepreneurship", "Mathematics"],
        &["Strategic thinking", "Data analysis", "Decision-making", "Explaining ideas"],
        &[8, 9, 17],
    ),
    (
        25,
        "Game Designer",
        "Builds interactive games for entertainment and education.",
        &["Computer Science / Programming", "Visual Arts (drawing, painting, sculpture)", "Psychology"],
        &["Creative thinking", "Coding", "Designing digitally", "Writing or storytelling"],
        &[4, 8, 9],
    ),
    (
        26,
        "Biotech Researcher",
        "Develops breakthroughs like vaccines, clean meat, or gene therapy.",
        &["Biology", "Chemistry", "Health Science / Pre-Med"],
        &["Problem solving", "Data analysis", "Supporting the planet", "Helping people"],
        &[3, 2, 9],
    ),
    (
        27,
        "Neuroscientist",
        "Studies the human brain to understand memory, emotions, and health.",
        &["Biology", "Psychology", "Health Science / Pre-Med"],
        &["Data analysis", "Problem solving", "Helping people", "Decision-making"],
        &[3, 9, 10],
    ),
    (
        28,
        "UX Designer",
        "Designs interfaces that make tech easy, ethical, and human-centered.",
        &["Psychology", "Graphic Design / Digital Media", "Computer Science / Programming"],
        &["Creative thinking", "Designing digitally", "Listening well", "Problem solving"],
        &[9, 10, 4],
    ),
];

const INTEREST_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Humanities & Social Sciences",
        &[
            "English Literature / Language Arts",
            "World Languages (e.g., French, Spanish, Mandarin, Hindi)",
            "History",
            "Geography",
            "Global Politics / Civics",
            "Philosophy",
            "Psychology",
            "Social & Cultural Anthropology",
            "Economics",
            "Business Studies / Entrepreneurship",
            "Ethics / TOK (Theory of Knowledge)",
        ],
    ),
    (
        "Sciences",
        &[
            "Biology",
            "Chemistry",
            "Physics",
            "Environmental Systems & Societies / Environmental Science",
            "General Science / Integrated Science",
            "Sports, Exercise & Health Science",
            "Food Science / Food Technology",
        ],
    ),
    (
        "Math & Technology",
        &[
            "Mathematics",
            "Computer Science / Programming",
            "Design & Technology / Engineering",
        ],
    ),
    (
        "Arts & Creativity",
        &[
            "Visual Arts (drawing, painting, sculpture)",
            "Graphic Design / Digital Media",
            "Film / Media Studies",
            "Drama / Theatre",
            "Music",
            "Dance",
        ],
    ),
    (
        "Applied & Vocational",
        &[
            "Architecture / Interior Design",
            "Product Design / Industrial Design",
            "Health Science / Pre-Med",
            "Agriculture / Sustainable Farming",
            "Hospitality / Culinary Arts",
            "Engineering (General or Applied)",
        ],
    ),
    (
        "Lifestyle & Physical Education",
        &[
            "Physical Education / Sports Science",
            "Coaching & Athletics",
        ],
    ),
];

const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Thinking & Solving",
        &[
            "Creative thinking",
            "Problem solving",
            "Strategic thinking",
            "Data analysis",
            "Decision-making",
        ],
    ),
    (
        "People & Communication",
        &[
            "Teamwork",
            "Leading others",
            "Explaining ideas",
            "Listening well",
            "Resolving conflict",
        ],
    ),
    (
        "Hands-On",
        &[
            "Building or fixing",
            "Cooking or crafting",
            "Working outdoors",
            "Using tools/machines",
        ],
    ),
    (
        "Digital Skills",
        &[
            "Coding",
            "Designing digitally",
            "Editing videos",
            "Working with data",
            "Troubleshooting tech",
        ],
    ),
    (
        "Creative Skills",
        &[
            "Drawing or painting",
            "Writing or storytelling",
            "Performing",
            "Music or audio",
            "Photography or video",
        ],
    ),
    (
        "Purpose & Values",
        &[
            "Helping people",
            "Supporting the planet",
            "Standing up for causes",
            "Understanding cultures",
            "Working with animals",
        ],
    ),
];

const SDGS: &[(u8, &str)] = &[
    (1, "No Poverty"),
    (2, "Zero Hunger"),
    (3, "Good Health & Well-Being"),
    (4, "Quality Education"),
    (5, "Gender Equality"),
    (6, "Clean Water & Sanitation"),
    (7, "Affordable & Clean Energy"),
    (8, "Decent Work & Economic Growth"),
    (9, "Industry, Innovation & Infrastructure"),
    (10, "Reduced Inequalities"),
    (11, "Sustainable Cities & Communities"),
    (12, "Responsible Consumption & Production"),
    (13, "Climate Action"),
    (14, "Life Below Water"),
    (15, "Life on Land"),
    (16, "Peace, Justice & Strong Institutions"),
    (17, "Partnerships for the Goals"),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn taxonomy(rows: &[(&str, &[&str])]) -> Vec<TaxonomyCategory> {
    rows.iter()
        .map(|(name, items)| TaxonomyCategory {
            name: name.to_string(),
            items: owned(items),
        })
        .collect()
}

pub fn careers() -> Vec<CareerRecord> {
    CAREERS
        .iter()
        .map(
            |(id, title, description, interests, skills, sdgs)| CareerRecord {
                id: *id,
                title: title.to_string(),
                description: description.to_string(),
                interests: owned(interests),
                skills: owned(skills),
                sdgs: sdgs.to_vec(),
            },
        )
        .collect()
}

pub fn interest_categories() -> Vec<TaxonomyCategory> {
    taxonomy(INTEREST_CATEGORIES)
}

pub fn skill_categories() -> Vec<TaxonomyCategory> {
    taxonomy(SKILL_CATEGORIES)
}

pub fn sdgs() -> Vec<Sdg> {
    SDGS.iter()
        .map(|(id, name)| Sdg {
            id: *id,
            name: name.to_string(),
        })
        .collect()
}
