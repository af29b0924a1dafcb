//! The built-in master question bank.
//!
//! Three fixed pools, 30 questions each. Loaded once, never mutated at
//! runtime; papers are sampled from copies of these pools.

use exam_core::model::{Category, Question, QuestionId};

type Entry = (u64, &'static str, [&'static str; 4], usize);

/// Immutable question pools, one per category.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    coding: Vec<Question>,
    aptitude: Vec<Question>,
    verbal: Vec<Question>,
}

impl QuestionBank {
    /// Loads the built-in dataset.
    ///
    /// # Panics
    ///
    /// Panics if a built-in entry fails validation, which would be a defect
    /// in the static tables below.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            coding: load_pool(Category::Coding, CODING),
            aptitude: load_pool(Category::Aptitude, APTITUDE),
            verbal: load_pool(Category::VerbalReasoning, VERBAL_REASONING),
        }
    }

    #[must_use]
    pub fn pool(&self, category: Category) -> &[Question] {
        match category {
            Category::Coding => &self.coding,
            Category::Aptitude => &self.aptitude,
            Category::VerbalReasoning => &self.verbal,
        }
    }

    #[must_use]
    pub fn pool_len(&self, category: Category) -> usize {
        self.pool(category).len()
    }

    /// Total questions across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.pool_len(*c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_pool(category: Category, entries: &[Entry]) -> Vec<Question> {
    entries
        .iter()
        .map(|(id, prompt, options, correct)| {
            Question::new(
                QuestionId::new(*id),
                category,
                *prompt,
                options.iter().map(ToString::to_string).collect(),
                *correct,
            )
            .expect("builtin question entry should be valid")
        })
        .collect()
}

const CODING: &[Entry] = &[
    (1, "What is the time complexity of a perfectly balanced Binary Search Tree search?", ["O(n)", "O(log n)", "O(n log n)", "O(1)"], 1),
    (2, "Which of the following is NOT an OOPS concept?", ["Encapsulation", "Polymorphism", "Compilation", "Inheritance"], 2),
    (3, "In SQL, which command is used to add data to a table?", ["ADD", "INSERT INTO", "UPDATE", "CREATE"], 1),
    (4, "What does the 'this' keyword refer to in a JavaScript arrow function?", ["The global object", "The object that called it", "The lexical scope's 'this'", "It is undefined"], 2),
    (5, "Which data structure uses LIFO (Last-In, First-Out)?", ["Queue", "Stack", "Linked List", "Tree"], 1),
    (6, "What is the purpose of the `finally` block in a try-catch statement?", ["To catch errors", "To execute code regardless of an error", "To throw a new error", "To handle specific exceptions"], 1),
    (7, "Which keyword is used to create a subclass in Java?", ["super", "this", "extends", "implements"], 2),
    (8, "What is the default value of a boolean in Java?", ["true", "false", "0", "null"], 1),
    (9, "Which of these is a primary key constraint?", ["It can be NULL", "It uniquely identifies each record", "It links two tables", "It is a foreign key"], 1),
    (10, "In CSS, how do you select an element with id 'header'?", ["#header", ".header", "header", "*header"], 0),
    (11, "What does API stand for?", ["Application Programming Interface", "Advanced Programming Interface", "Application Protocol Interface", "Applied Programming Interface"], 0),
    (12, "Which data structure uses FIFO (First-In, First-Out)?", ["Stack", "Array", "Queue", "Tree"], 2),
    (13, "What is the term for a function calling itself?", ["Iteration", "Recursion", "Duplication", "Overloading"], 1),
    (14, "In Python, which keyword is used to define a function?", ["function", "def", "func", "define"], 1),
    (15, "What HTTP status code means 'Not Found'?", ["200", "500", "404", "301"], 2),
    (16, "Which is a NoSQL database?", ["MySQL", "PostgreSQL", "Oracle", "MongoDB"], 3),
    (17, "What is polymorphism?", ["Hiding implementation details", "One name, many forms", "Wrapping data and methods together", "Inheriting properties from a parent class"], 1),
    (18, "What is the time complexity of Quicksort in the worst case?", ["O(log n)", "O(n)", "O(n log n)", "O(n^2)"], 3),
    (19, "Which `git` command is used to stage files for a commit?", ["git commit", "git push", "git add", "git stage"], 2),
    (20, "What does HTML stand for?", ["Hyper Text Markup Language", "High Tech Modern Language", "Hyperlink and Text Markup Language", "Home Tool Markup Language"], 0),
    (21, "Which of the following is a compiled language?", ["JavaScript", "Python", "Ruby", "C++"], 3),
    (22, "A pointer is a variable that stores...", ["A character value", "An integer value", "A float value", "The memory address of another variable"], 3),
    (23, "What is the main purpose of an operating system?", ["To provide a user interface", "To manage hardware and software resources", "To run applications", "To connect to the internet"], 1),
    (24, "Which SQL clause is used to filter results?", ["FILTER", "WHERE", "HAVING", "SORT"], 1),
    (25, "What is JSON?", ["Java Standard Object Notation", "JavaScript Object Notation", "JavaScript Standard Object Naming", "Java Object Naming"], 1),
    (26, "In networking, what does DNS stand for?", ["Domain Name System", "Dynamic Network Service", "Domain Naming Standard", "Data Network System"], 0),
    (27, "What is the difference between `let` and `const` in JavaScript?", ["`let` is function-scoped, `const` is block-scoped", "`let` can be reassigned, `const` cannot", "`const` can be reassigned, `let` cannot", "There is no difference"], 1),
    (28, "What is a constructor in object-oriented programming?", ["A function that destroys an object", "A special method for creating and initializing an object", "A method for copying an object", "A type of variable"], 1),
    (29, "Which sorting algorithm is considered the fastest on average?", ["Bubble Sort", "Insertion Sort", "Quicksort", "Selection Sort"], 2),
    (30, "What does 'null' typically represent in programming?", ["The number zero", "An empty string", "The intentional absence of any object value", "An uninitialized variable"], 2),
];

const APTITUDE: &[Entry] = &[
    (101, "If a car travels 60 km in 1 hour, how far will it travel in 2.5 hours?", ["120 km", "150 km", "180 km", "200 km"], 1),
    (102, "What is 25% of 200?", ["25", "40", "50", "75"], 2),
    (103, "A train 100m long is running at a speed of 30 km/hr. Find the time taken by it to pass a man standing near the railway line.", ["10 seconds", "12 seconds", "15 seconds", "18 seconds"], 1),
    (104, "The sum of two numbers is 40 and their difference is 4. What is the ratio of the two numbers?", ["11:9", "11:10", "10:9", "9:7"], 0),
    (105, "If the cost price of 10 articles is equal to the selling price of 8 articles, what is the profit percent?", ["20%", "25%", "30%", "15%"], 1),
    (106, "Find the average of the first 50 natural numbers.", ["25", "25.5", "26", "26.5"], 1),
    (107, "What is the next number in the sequence: 2, 6, 12, 20, 30, ...?", ["40", "42", "44", "46"], 1),
    (108, "A man buys a toy for Rs. 25 and sells it for Rs. 28.50. His gain percent is:", ["14%", "15%", "16%", "18%"], 0),
    (109, "How many degrees are there in the angle between the hour and minute hands of a clock when the time is 3:30?", ["75°", "85°", "90°", "105°"], 0),
    (110, "If 3 men can do a piece of work in 4 days, how many men are needed to do the same work in 2 days?", ["5", "6", "7", "8"], 1),
    (111, "A boat travels 20 km upstream in 5 hours and 30 km downstream in 5 hours. What is the speed of the boat in still water?", ["4 km/hr", "5 km/hr", "6 km/hr", "10 km/hr"], 1),
    (112, "The simple interest on Rs. 500 for 4 years at 5% per annum is:", ["Rs. 80", "Rs. 100", "Rs. 120", "Rs. 125"], 1),
    (113, "The ratio of two numbers is 3:4 and their sum is 49. The numbers are:", ["20, 29", "21, 28", "22, 27", "23, 26"], 1),
    (114, "If a pipe can fill a tank in 6 hours and another pipe can empty it in 12 hours, how long will it take to fill the tank if both are open?", ["8 hours", "10 hours", "12 hours", "14 hours"], 2),
    (115, "What is the area of a circle with a radius of 7 cm?", ["144 sq.cm", "154 sq.cm", "164 sq.cm", "174 sq.cm"], 1),
    (116, "If A:B = 2:3 and B:C = 4:5, then what is C:A?", ["15:8", "8:15", "12:15", "10:8"], 0),
    (117, "A father is twice as old as his son. 20 years ago, he was twelve times as old as his son. What is the father's current age?", ["32 years", "44 years", "48 years", "52 years"], 1),
    (118, "What is the value of 101 x 99?", ["9999", "9991", "10001", "9989"], 0),
    (119, "The perimeter of a rectangle is 40m. If its length is 12m, what is its breadth?", ["8m", "10m", "14m", "16m"], 0),
    (120, "A cube has a volume of 125 cubic cm. What is the length of its edge?", ["4 cm", "5 cm", "6 cm", "7 cm"], 1),
    (121, "What is the least number that must be added to 1056 to get a number exactly divisible by 23?", ["2", "18", "21", "22"], 0),
    (122, "Two-thirds of a number is 20. What is the number?", ["15", "30", "40", "60"], 1),
    (123, "The L.C.M. of 24, 36 and 40 is:", ["120", "240", "360", "480"], 2),
    (124, "If today is Monday, what will be the day after 61 days?", ["Wednesday", "Saturday", "Tuesday", "Thursday"], 1),
    (125, "A vendor bought toffees at 6 for a rupee. How many for a rupee must he sell to gain 20%?", ["3", "4", "5", "Not possible"], 2),
    (126, "The population of a town increases by 5% annually. If its present population is 4410, what was it 2 years ago?", ["4000", "3800", "4200", "3500"], 0),
    (127, "A worker is paid Rs. 150 for 6 days of work. If he works for 23 days, how much will he get?", ["Rs. 575", "Rs. 600", "Rs. 625", "Rs. 550"], 0),
    (128, "Find the missing number: 8, 27, 64, ?, 216.", ["100", "125", "150", "180"], 1),
    (129, "In an election, a candidate who gets 84% of the votes is elected by a majority of 476 votes. What is the total number of votes polled?", ["672", "700", "749", "810"], 1),
    (130, "A can do a work in 15 days and B in 20 days. If they work on it together for 4 days, then the fraction of the work that is left is:", ["1/4", "1/10", "7/15", "8/15"], 3),
];

const VERBAL_REASONING: &[Entry] = &[
    (201, "Which word is the synonym of 'Ephemeral'?", ["Eternal", "Transient", "Permanent", "Beautiful"], 1),
    (202, "Complete the series: 5, 10, 17, 26, ?", ["35", "37", "39", "41"], 1),
    (203, "A is B's sister. C is B's mother. D is C's father. E is D's mother. Then, how is A related to D?", ["Grandfather", "Grandmother", "Daughter", "Granddaughter"], 3),
    (204, "Select the correctly spelled word.", ["Embarass", "Embarrass", "embaras", "embbaras"], 1),
    (205, "Find the antonym of 'Malice'.", ["Goodwill", "Cruelty", "Spite", "Hatred"], 0),
    (206, "Choose the word which best expresses the meaning of 'Candid'.", ["Biased", "Devious", "Frank", "Secretive"], 2),
    (207, "In a certain code, 'ROAD' is written as 'URDG'. How is 'SWAN' written in that code?", ["VXDQ", "VZDQ", "VZCQ", "UXDQ"], 1),
    (208, "I prefer tea ___ coffee.", ["than", "over", "from", "to"], 3),
    (209, "Find the odd one out: Car, Bus, Scooter, Bicycle.", ["Car", "Bus", "Scooter", "Bicycle"], 3),
    (210, "A man is facing North. He turns 180 degrees in the clockwise direction and then 45 degrees in the same direction. Which direction is he facing now?", ["South-West", "South-East", "West", "North-West"], 0),
    (211, "The book was so interesting that I was completely ____.", ["engrossed", "exhausted", "enraged", "disturbed"], 0),
    (212, "If 'pen' is 'table', 'table' is 'fan', 'fan' is 'chair' and 'chair' is 'roof', on which of the following will a person sit?", ["Fan", "Chair", "Roof", "Table"], 2),
    (213, "Choose the alternative which best expresses the meaning of the idiom 'To bite the dust'.", ["To eat voraciously", "To have nothing to eat", "To fail", "To be successful"], 2),
    (214, "Which of the following is a palindrome?", ["12321", "12345", "11223", "121212"], 0),
    (215, "He is senior ___ me by two years.", ["than", "to", "from", "of"], 1),
    (216, "Look! The bus ___.", ["is coming", "comes", "has come", "had come"], 0),
    (217, "Which word means 'a person who can speak many languages'?", ["Linguist", "Polyglot", "Bilingual", "Monolingual"], 1),
    (218, "Book is to Reading as Fork is to:", ["Drawing", "Writing", "Eating", "Stirring"], 2),
    (219, "The detective found a ___ of evidence at the crime scene.", ["plethora", "scarcity", "lack", "shortage"], 0),
    (220, "Complete the sentence: 'Neither the students nor the teacher ___ present.'", ["were", "was", "are", "have been"], 1),
    (221, "What is the study of ancient societies called?", ["Anthropology", "Archaeology", "History", "Etymology"], 1),
    (222, "If '+' means '÷', '÷' means '−', '−' means '×', and '×' means '+', what is the value of 12 + 6 ÷ 3 − 2 × 8?", ["-2", "2", "4", "8"], 2),
    (223, "The antonym of 'Transparent' is:", ["Clear", "Opaque", "Cloudy", "Lucid"], 1),
    (224, "I have not seen him since he ___ the city.", ["left", "has left", "had left", "was leaving"], 0),
    (225, "Find the odd one out: Lion, Tiger, Leopard, Cow.", ["Lion", "Tiger", "Leopard", "Cow"], 3),
    (226, "The practice of having more than one wife at a time is called:", ["Monogamy", "Polygamy", "Bigamy", "Polyandry"], 1),
    (227, "Find the missing letters: a_c_a_c_a_c", ["b, a, b, a", "a, b, b, a", "a, c, a, c", "a, b, a, b"], 3),
    (228, "The opposite of 'bravery' is:", ["Courage", "Fear", "Cowardice", "Heroism"], 2),
    (229, "A person who is new to a profession is called a:", ["Veteran", "Novice", "Expert", "Professional"], 1),
    (230, "A dog is to a kennel as a bee is to a:", ["Nest", "Hive", "Den", "Stable"], 1),
];

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_bank_has_thirty_per_pool() {
        let bank = QuestionBank::builtin();
        for category in Category::ALL {
            assert_eq!(bank.pool_len(category), 30, "{category} pool");
        }
        assert_eq!(bank.len(), 90);
        assert!(!bank.is_empty());
    }

    #[test]
    fn builtin_ids_are_unique_across_pools() {
        let bank = QuestionBank::builtin();
        let mut seen = HashSet::new();
        for category in Category::ALL {
            for question in bank.pool(category) {
                assert!(seen.insert(question.id()), "duplicate id {}", question.id());
                assert_eq!(question.category(), category);
            }
        }
    }
}
