// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use greeter::{User, add, greet};

fn main() {
	let x = 10;
	let y = 20;
	let result = add(x, y);
	println!("Result: {result}");

	let user = User {
		name: "Alice".to_string(),
		age: 30,
		email: "alice@example.com".to_string(),
	};
	greet(&user.name);

	let is_valid = true;
	if is_valid {
		println!("Valid user");
	}
}
