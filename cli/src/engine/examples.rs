use serde::{Deserialize, Serialize};

/// A titled list of sample utterances
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExampleGroup {
    pub category: String,
    pub examples: Vec<String>,
}

const CATALOG: &[(&str, &[&str])] = &[
    (
        "Arithmetic",
        &[
            "What is 25 plus 17?",
            "125 divided by 5",
            "48 times 12",
            "1000 minus 347",
            "15 percent of 200",
        ],
    ),
    (
        "Scientific",
        &[
            "Square root of 144",
            "5 to the power of 3",
            "Sine of 45 degrees",
            "Log of 1000",
            "Factorial of 6",
        ],
    ),
    (
        "Conversions",
        &[
            "Convert 5 miles to kilometers",
            "100 fahrenheit to celsius",
            "Convert 10 pounds to kilograms",
            "50 gallons to liters",
            "Convert 3 feet to centimeters",
        ],
    ),
    (
        "Measurements",
        &[
            "Area of a circle radius 5",
            "Volume of a sphere radius 3",
            "Area of a rectangle 10 by 5",
            "Hypotenuse 3 and 4",
            "BMI 70 1.75",
        ],
    ),
];

/// Sample utterances grouped by category, one group per matcher
pub fn example_commands() -> Vec<ExampleGroup> {
    CATALOG
        .iter()
        .map(|(category, examples)| ExampleGroup {
            category: category.to_string(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        })
        .collect()
}
