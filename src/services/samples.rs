// 示例解答表
// 每个学科一份预先写好的解答，按学科取用

use crate::models::{Difficulty, Solution, Step, Subject};

/// 图片输入时追加在最前面的步骤
pub fn image_analysis_step() -> Step {
    Step::text(
        "Image Analysis",
        "I've analyzed your uploaded image and identified the problem. Here's the step-by-step solution:",
    )
}

/// 获取学科对应的示例解答（每次返回新的副本）
pub fn sample_solution(subject: Subject) -> Solution {
    match subject {
        Subject::Math => math(),
        Subject::Science => science(),
        Subject::Coding => coding(),
    }
}

fn math() -> Solution {
    Solution {
        answer: "x = 5".to_string(),
        steps: vec![
            Step::with_formula(
                "Identify the equation type",
                "This is a linear equation in one variable. We need to isolate x on one side.",
                "2x + 5 = 15",
            ),
            Step::with_formula(
                "Subtract 5 from both sides",
                "To isolate the term with x, we subtract 5 from both sides of the equation.",
                "2x + 5 - 5 = 15 - 5 → 2x = 10",
            ),
            Step::with_formula(
                "Divide both sides by 2",
                "Now we divide both sides by 2 to solve for x.",
                "2x ÷ 2 = 10 ÷ 2 → x = 5",
            ),
            Step::with_formula(
                "Verify the solution",
                "Let's check our answer by substituting x = 5 back into the original equation.",
                "2(5) + 5 = 10 + 5 = 15 ✓",
            ),
        ],
        difficulty: Difficulty::Easy,
        time_to_complete: "3 minutes".to_string(),
    }
}

fn science() -> Solution {
    Solution {
        answer: "H₂O (2 hydrogen atoms + 1 oxygen atom)".to_string(),
        steps: vec![
            Step::text(
                "Identify the compound",
                "Water is a chemical compound composed of hydrogen and oxygen atoms.",
            ),
            Step::text(
                "Count hydrogen atoms",
                "Each water molecule contains 2 hydrogen atoms. These are represented by H₂ in the formula.",
            ),
            Step::text(
                "Count oxygen atoms",
                "Each water molecule contains 1 oxygen atom, represented by O in the formula.",
            ),
            Step::with_formula(
                "Write the molecular formula",
                "Combining the elements, we get H₂O, where the subscript 2 indicates two hydrogen atoms.",
                "H₂O",
            ),
        ],
        difficulty: Difficulty::Easy,
        time_to_complete: "2 minutes".to_string(),
    }
}

fn coding() -> Solution {
    Solution {
        answer: "def my_function(parameter): return result".to_string(),
        steps: vec![
            Step::with_code(
                "Use the 'def' keyword",
                "In Python, functions are defined using the 'def' keyword followed by the function name.",
                "def function_name():",
            ),
            Step::with_code(
                "Add parameters (optional)",
                "Parameters go inside parentheses. You can have multiple parameters separated by commas.",
                "def my_function(param1, param2):",
            ),
            Step::with_code(
                "Add the function body",
                "The function body is indented and contains the code that runs when the function is called.",
                "def my_function(param1, param2):\n    # Function body here\n    result = param1 + param2\n    return result",
            ),
            Step::with_code(
                "Call the function",
                "To use the function, call it by name with arguments if it has parameters.",
                "# Call the function\nresult = my_function(5, 3)\nprint(result)  # Output: 8",
            ),
        ],
        difficulty: Difficulty::Easy,
        time_to_complete: "5 minutes".to_string(),
    }
}
