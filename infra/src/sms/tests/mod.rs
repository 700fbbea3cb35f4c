mod twilio_tests;
