mod emission;
